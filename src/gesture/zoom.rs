// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Owns the scalar zoom factor of the lightbox viewport and the three step
//! functions driving it: multiplicative button steps, additive wheel steps,
//! and the live distance ratio of a pinch. Each input modality keeps its
//! natural granularity; the difference is intentional.

pub use crate::config::{
    BUTTON_ZOOM_STEP, DOUBLE_TAP_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR,
};

/// Values this close to a bound snap exactly onto it, so accumulated float
/// drift from repeated wheel ticks cannot leave the factor at 0.99999994
/// instead of 1.0.
const BOUND_SNAP_EPSILON: f32 = 1e-4;

/// Zoom factor, guaranteed to be within the valid range (1.0–4.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range and
    /// snapping near-bound values onto the bound.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        let mut clamped = factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
        if (clamped - MIN_ZOOM_FACTOR).abs() < BOUND_SNAP_EPSILON {
            clamped = MIN_ZOOM_FACTOR;
        } else if (clamped - MAX_ZOOM_FACTOR).abs() < BOUND_SNAP_EPSILON {
            clamped = MAX_ZOOM_FACTOR;
        }
        Self(clamped)
    }

    /// Returns the raw zoom factor.
    #[must_use]
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at rest (no pan allowed).
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    /// Returns whether the viewport is zoomed in at all.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > MIN_ZOOM_FACTOR
    }

    /// One multiplicative button step in.
    #[must_use]
    pub fn stepped_in(self) -> Self {
        Self::new(self.0 * BUTTON_ZOOM_STEP)
    }

    /// One multiplicative button step out.
    #[must_use]
    pub fn stepped_out(self) -> Self {
        Self::new(self.0 / BUTTON_ZOOM_STEP)
    }

    /// Scales by a live pinch distance ratio.
    #[must_use]
    pub fn scaled_by(self, ratio: f32) -> Self {
        Self::new(self.0 * ratio)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(MIN_ZOOM_FACTOR)
    }
}

/// Manages the zoom factor for the lightbox viewport.
///
/// All operations are total: out-of-range targets are clamped, never
/// rejected. Callers are responsible for resetting pan whenever an
/// operation lands back on the rest factor.
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    level: ZoomLevel,
}

impl ZoomState {
    /// Returns the current zoom level.
    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    /// Applies one button step in (×1.5, clamped to the maximum).
    pub fn zoom_in(&mut self) {
        self.level = self.level.stepped_in();
    }

    /// Applies one button step out (÷1.5, clamped to the rest factor).
    pub fn zoom_out(&mut self) {
        self.level = self.level.stepped_out();
    }

    /// Sets the zoom factor directly, clamped. Used by the pinch and wheel
    /// handlers, which compute a continuous target.
    pub fn set(&mut self, target: f32) {
        self.level = ZoomLevel::new(target);
    }

    /// Returns the zoom to the rest factor.
    pub fn reset(&mut self) {
        self.level = ZoomLevel::default();
    }

    /// Binary double-tap toggle: zoomed in at all → rest; at rest → 2.0.
    pub fn toggle_double_tap(&mut self) {
        if self.level.is_zoomed() {
            self.reset();
        } else {
            self.set(DOUBLE_TAP_ZOOM_FACTOR);
        }
    }
}
