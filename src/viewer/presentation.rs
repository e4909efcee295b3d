// SPDX-License-Identifier: MPL-2.0
//! Render-ready viewer state
//!
//! Maps engine state (zoom, pan, dragging flag, media kind) to the small
//! set of values the renderer needs: a viewport transform, a cursor
//! affordance, and enable/visibility flags for the zoom controls. No other
//! state crosses the render boundary.

use crate::viewer::session::ViewerSession;
use iced_core::Vector;

/// Viewport transform, anchored at the visual center of the media.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Pan translation in viewport pixels.
    pub translation: Vector,
    /// Zoom scale factor.
    pub scale: f32,
}

impl ViewTransform {
    /// Identity transform: centered, unscaled.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            translation: Vector::new(0.0, 0.0),
            scale: 1.0,
        }
    }

    /// Renders the transform as its CSS equivalent, translation first so
    /// the pan offset is not multiplied by the scale.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translation.x, self.translation.y, self.scale
        )
    }
}

/// Cursor shape to show over the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    /// Rest zoom over an image: clicking/tapping zooms in.
    ZoomIn,
    /// Zoomed in, not dragging: the viewport can be grabbed.
    Grab,
    /// Zoomed in and dragging.
    Grabbing,
    /// Video content: the viewport offers no zoom/pan interaction.
    Default,
}

/// Everything the renderer needs for one frame of the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Viewport transform for the media element.
    pub transform: ViewTransform,
    /// Cursor to show over the media.
    pub cursor: CursorAffordance,
    /// Whether the viewport is zoomed in at all.
    pub is_zoomed: bool,
    /// Zoom-in control enabled (false at maximum zoom).
    pub zoom_in_enabled: bool,
    /// Zoom-out control enabled (false at rest zoom).
    pub zoom_out_enabled: bool,
    /// Reset-zoom affordance visible (only while zoomed).
    pub reset_visible: bool,
    /// Whether the zoom controls render at all (hidden for video).
    pub zoom_controls_visible: bool,
    /// Navigation arrows render enlarged and higher-contrast while the
    /// viewport is zoomed, since they sit over magnified content.
    pub prominent_navigation: bool,
}

impl Presentation {
    /// Derives the render state for the session's visible slide.
    #[must_use]
    pub fn for_session(session: &ViewerSession) -> Self {
        if session.is_current_video() {
            return Self::for_video();
        }

        let zoom = session.zoom();
        let is_zoomed = zoom.is_zoomed();

        Self {
            transform: ViewTransform {
                translation: session.pan_offset(),
                scale: zoom.factor(),
            },
            cursor: if session.is_dragging() {
                CursorAffordance::Grabbing
            } else if is_zoomed {
                CursorAffordance::Grab
            } else {
                CursorAffordance::ZoomIn
            },
            is_zoomed,
            zoom_in_enabled: !zoom.is_max(),
            zoom_out_enabled: !zoom.is_min(),
            reset_visible: is_zoomed,
            zoom_controls_visible: true,
            prominent_navigation: is_zoomed,
        }
    }

    /// Render state for a video slide: identity transform and every
    /// zoom/pan affordance suppressed.
    #[must_use]
    fn for_video() -> Self {
        Self {
            transform: ViewTransform::identity(),
            cursor: CursorAffordance::Default,
            is_zoomed: false,
            zoom_in_enabled: false,
            zoom_out_enabled: false,
            reset_visible: false,
            zoom_controls_visible: false,
            prominent_navigation: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::media::MediaItem;
    use crate::gesture::engine::InputEvent;
    use crate::test_utils::assert_abs_diff_eq;
    use iced_core::Point;

    fn image_session() -> ViewerSession {
        ViewerSession::new(vec![MediaItem::image("a.jpg")], 0, &Config::default())
    }

    #[test]
    fn rest_state_offers_zoom_in() {
        let session = image_session();
        let view = Presentation::for_session(&session);

        assert_eq!(view.cursor, CursorAffordance::ZoomIn);
        assert!(!view.is_zoomed);
        assert!(view.zoom_in_enabled);
        assert!(!view.zoom_out_enabled);
        assert!(!view.reset_visible);
        assert!(!view.prominent_navigation);
        assert_abs_diff_eq!(view.transform.scale, 1.0);
    }

    #[test]
    fn zoomed_state_enables_both_directions_and_reset() {
        let mut session = image_session();
        session.zoom_in();
        let view = Presentation::for_session(&session);

        assert_eq!(view.cursor, CursorAffordance::Grab);
        assert!(view.is_zoomed);
        assert!(view.zoom_in_enabled);
        assert!(view.zoom_out_enabled);
        assert!(view.reset_visible);
        assert!(view.prominent_navigation);
    }

    #[test]
    fn max_zoom_disables_zoom_in() {
        let mut session = image_session();
        for _ in 0..10 {
            session.zoom_in();
        }
        let view = Presentation::for_session(&session);
        assert!(!view.zoom_in_enabled);
        assert!(view.zoom_out_enabled);
    }

    #[test]
    fn dragging_shows_grabbing_cursor() {
        let mut session = image_session();
        session.zoom_in();
        session.handle_input(InputEvent::PointerPressed(Point::new(0.0, 0.0)));
        session.handle_input(InputEvent::PointerMoved(Point::new(30.0, 10.0)));

        let view = Presentation::for_session(&session);
        assert_eq!(view.cursor, CursorAffordance::Grabbing);
        assert_abs_diff_eq!(view.transform.translation.x, 30.0);
        assert_abs_diff_eq!(view.transform.translation.y, 10.0);
    }

    #[test]
    fn transform_renders_as_css() {
        let transform = ViewTransform {
            translation: Vector::new(100.0, 50.0),
            scale: 2.0,
        };
        assert_eq!(transform.to_css(), "translate(100px, 50px) scale(2)");
    }

    #[test]
    fn video_slide_suppresses_all_zoom_affordances() {
        let session = ViewerSession::new(
            vec![MediaItem::video("tour.mp4")],
            0,
            &Config::default(),
        );
        let view = Presentation::for_session(&session);

        assert_eq!(view.transform, ViewTransform::identity());
        assert_eq!(view.cursor, CursorAffordance::Default);
        assert!(!view.zoom_controls_visible);
        assert!(!view.zoom_in_enabled);
        assert!(!view.zoom_out_enabled);
        assert!(!view.reset_visible);
    }
}
