// SPDX-License-Identifier: MPL-2.0
//! Carousel synchronization
//!
//! Bridges the gesture engine to the external slide controller that owns
//! slide indices and fires selection events. This is the single
//! integration seam between the carousel and the viewport: every slide
//! selection, whatever triggered it, passes through here and resets the
//! viewport.

use crate::config::Config;
use crate::domain::media::MediaItem;
use crate::viewer::session::ViewerSession;

/// Boundary to the external carousel component.
///
/// The sync adapter calls `seek_to` once at open time; the carousel calls
/// back [`ViewportSync::on_slide_selected`] on every slide change, whether
/// from a swipe, an arrow click, or programmatic navigation.
pub trait SlideController {
    /// Moves the carousel to `index`, animating the transition only when
    /// `animate` is true.
    fn seek_to(&mut self, index: usize, animate: bool);
}

/// Owns the viewer session across the open/slide-change/close lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ViewportSync {
    config: Config,
    session: Option<ViewerSession>,
}

impl ViewportSync {
    /// Creates a sync adapter with the given preferences.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Opens the viewer: builds a fresh session and jumps the carousel to
    /// the start slide without a transition animation, so the first paint
    /// shows the requested slide immediately.
    pub fn on_open(
        &mut self,
        items: Vec<MediaItem>,
        start_index: usize,
        controller: &mut dyn SlideController,
    ) {
        let session = ViewerSession::new(items, start_index, &self.config);
        controller.seek_to(session.current_index(), false);
        self.session = Some(session);
    }

    /// Carousel callback: a new slide became visible. Unconditionally
    /// resets zoom, pan, and gesture phase — including re-selection of the
    /// current index.
    pub fn on_slide_selected(&mut self, new_index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.select_slide(new_index);
        }
    }

    /// Closes the viewer, discarding all in-flight gesture state. Nothing
    /// persists across opens.
    pub fn on_close(&mut self) {
        self.session = None;
    }

    /// Returns whether a viewer session is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ViewerSession> {
        self.session.as_ref()
    }

    /// Returns the open session mutably, if any.
    #[must_use]
    pub fn session_mut(&mut self) -> Option<&mut ViewerSession> {
        self.session.as_mut()
    }
}
