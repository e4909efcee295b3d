// SPDX-License-Identifier: MPL-2.0
//! Gesture state machine
//!
//! Interprets the classified pointer/touch/wheel event stream and drives
//! the zoom and pan state. Disambiguates single-finger pan from two-finger
//! pinch, handles the double-tap toggle, and gates everything on whether
//! the current media item is zoomable.
//!
//! The machine is total: every input is either a valid transition or a
//! no-op. A move event with no preceding down event finds no drag anchor
//! and is ignored; out-of-range numeric input is clamped downstream.

use crate::config::DEFAULT_WHEEL_ZOOM_STEP;
use crate::gesture::pan::PanState;
use crate::gesture::touch::pinch_distance;
use crate::gesture::zoom::{ZoomLevel, ZoomState};
use iced_core::{Point, Vector};

/// The mutually-exclusive interaction mode the engine is in.
///
/// Derived from the live input stream and never persisted across slide
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Single pointer dragging the zoomed viewport.
    Panning,
    /// Two fingers driving continuous zoom.
    Pinching,
}

/// A classified input event, already lifted out of the host toolkit's raw
/// event types.
///
/// Touch events carry the full list of active touch points after the
/// change, in arrival order, mirroring what a platform touch list reports.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button or single-pointer press.
    PointerPressed(Point),
    /// Pointer moved while pressed.
    PointerMoved(Point),
    /// Pointer released.
    PointerReleased,
    /// A finger went down; all active points.
    TouchesBegan(Vec<Point>),
    /// One or more fingers moved; all active points.
    TouchesMoved(Vec<Point>),
    /// A finger lifted; the points still down.
    TouchesEnded(Vec<Point>),
    /// Double-tap or double-click, pre-debounced by the input translator.
    DoubleTap,
    /// Wheel tick; positive `delta_y` means scroll away (zoom out), the
    /// platform convention the translator normalizes to.
    Wheel { delta_y: f32 },
}

/// Interprets input events and owns the viewport zoom/pan state.
///
/// One engine exists per viewer session. Slide changes reset it through
/// [`reset`](GestureEngine::reset); nothing carries across slides.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    phase: GesturePhase,
    zoom: ZoomState,
    pan: PanState,
    /// Pinch scratch state; meaningful only while `Pinching`.
    last_pinch_distance: Option<f32>,
    /// Whether the current media item accepts zoom/pan (false for video).
    zoomable: bool,
    /// Additive zoom step per wheel tick.
    wheel_step: f32,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(true, DEFAULT_WHEEL_ZOOM_STEP)
    }
}

impl GestureEngine {
    /// Creates an engine for a media item.
    #[must_use]
    pub fn new(zoomable: bool, wheel_step: f32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            zoom: ZoomState::default(),
            pan: PanState::default(),
            last_pinch_distance: None,
            zoomable,
            wheel_step,
        }
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns the current zoom level.
    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom.level()
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.pan.offset()
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Panning && self.pan.is_dragging()
    }

    /// Returns whether the current item accepts zoom/pan.
    #[must_use]
    pub fn is_zoomable(&self) -> bool {
        self.zoomable
    }

    /// Updates zoomability when the visible slide changes kind. Resetting
    /// the accumulated state is the sync adapter's job, not this one's.
    pub fn set_zoomable(&mut self, zoomable: bool) {
        self.zoomable = zoomable;
    }

    /// Processes one classified input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPressed(position) => self.on_single_down(position),
            InputEvent::PointerMoved(position) => self.on_drag_move(position),
            InputEvent::PointerReleased => self.settle_to_idle(),
            InputEvent::TouchesBegan(points) => match points.as_slice() {
                [] => {}
                [single] => self.on_single_down(*single),
                _ => self.enter_pinch(&points),
            },
            InputEvent::TouchesMoved(points) => match self.phase {
                GesturePhase::Pinching if points.len() >= 2 => self.on_pinch_move(&points),
                GesturePhase::Panning => {
                    if let Some(first) = points.first() {
                        self.on_drag_move(*first);
                    }
                }
                _ => {}
            },
            InputEvent::TouchesEnded(remaining) => match remaining.as_slice() {
                [] => self.settle_to_idle(),
                [single] => self.on_collapse_to_single(*single),
                _ => {
                    // Still two or more fingers down; restart distance
                    // tracking from the surviving pair.
                    if self.phase == GesturePhase::Pinching {
                        self.last_pinch_distance = Some(pinch_distance(&remaining));
                    }
                }
            },
            InputEvent::DoubleTap => self.on_double_tap(),
            InputEvent::Wheel { delta_y } => self.on_wheel(delta_y),
        }
    }

    /// Zoom-in button: one multiplicative step.
    pub fn zoom_in(&mut self) {
        if self.zoomable {
            self.zoom.zoom_in();
        }
    }

    /// Zoom-out button: one multiplicative step, recentering at rest.
    pub fn zoom_out(&mut self) {
        if self.zoomable {
            self.zoom.zoom_out();
            self.settle_pan();
        }
    }

    /// Returns the viewport to its default state: rest zoom, centered,
    /// idle. Invoked on every slide change.
    pub fn reset(&mut self) {
        self.zoom.reset();
        self.pan.reset();
        self.settle_to_idle();
    }

    fn on_single_down(&mut self, position: Point) {
        // At rest zoom a single-finger drag belongs to the carousel swipe,
        // not to the viewport.
        if self.zoomable && self.zoom.level().is_zoomed() {
            self.pan.begin_drag(position);
            self.phase = GesturePhase::Panning;
        }
    }

    fn on_drag_move(&mut self, position: Point) {
        // The zoom check covers a drag whose zoom was toggled back to rest
        // mid-gesture; the anchor is already gone but the phase may linger
        // until release.
        if self.phase == GesturePhase::Panning && self.zoomable && self.zoom.level().is_zoomed() {
            self.pan.drag_to(position, self.zoom.level());
        }
    }

    fn enter_pinch(&mut self, points: &[Point]) {
        if self.phase == GesturePhase::Panning {
            self.pan.end_drag();
        }
        self.last_pinch_distance = Some(pinch_distance(points));
        self.phase = GesturePhase::Pinching;
    }

    fn on_pinch_move(&mut self, points: &[Point]) {
        let new_distance = pinch_distance(points);
        if let Some(last_distance) = self.last_pinch_distance {
            if self.zoomable && last_distance > 0.0 && new_distance > 0.0 {
                let scale = new_distance / last_distance;
                self.zoom.set(self.zoom.level().factor() * scale);
                self.settle_pan();
            }
        }
        self.last_pinch_distance = Some(new_distance);
    }

    fn on_collapse_to_single(&mut self, remaining: Point) {
        self.last_pinch_distance = None;
        if self.zoomable && self.zoom.level().is_zoomed() {
            self.pan.rebase_drag(remaining);
            self.phase = GesturePhase::Panning;
        } else {
            self.pan.end_drag();
            self.phase = GesturePhase::Idle;
        }
    }

    fn on_double_tap(&mut self) {
        if self.zoomable {
            self.zoom.toggle_double_tap();
            self.settle_pan();
        }
    }

    fn on_wheel(&mut self, delta_y: f32) {
        // Wheel input over a video must not be hijacked from its native
        // scrub/volume handling.
        if self.zoomable {
            let step = if delta_y > 0.0 {
                -self.wheel_step
            } else {
                self.wheel_step
            };
            self.zoom.set(self.zoom.level().factor() + step);
            self.settle_pan();
        }
    }

    fn settle_to_idle(&mut self) {
        self.phase = GesturePhase::Idle;
        self.pan.end_drag();
        self.last_pinch_distance = None;
    }

    fn settle_pan(&mut self) {
        if self.zoom.level().is_min() {
            self.pan.reset();
        }
    }
}
