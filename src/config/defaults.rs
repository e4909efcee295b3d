// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and the three input step functions
//! - **Pan**: Pan slack bound
//! - **Double-tap**: Detection window and slop radius

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor at rest (1.0 = the image fits the viewport, no pan allowed).
pub const MIN_ZOOM_FACTOR: f32 = 1.0;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 4.0;

/// Multiplicative step applied by the zoom in/out buttons.
pub const BUTTON_ZOOM_STEP: f32 = 1.5;

/// Additive step applied per wheel tick.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.2;

/// Smallest accepted wheel step override.
pub const MIN_WHEEL_ZOOM_STEP: f32 = 0.05;

/// Largest accepted wheel step override.
pub const MAX_WHEEL_ZOOM_STEP: f32 = 1.0;

/// Zoom factor a double-tap toggles to from rest.
pub const DOUBLE_TAP_ZOOM_FACTOR: f32 = 2.0;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Pan bound per zoom unit: the offset on each axis is clamped into
/// `[-PAN_SLACK_PER_ZOOM * zoom, +PAN_SLACK_PER_ZOOM * zoom]`.
///
/// A constant, deliberately generous bound that permits rubber-band
/// overshoot past the image edges instead of content-aware bounds math.
pub const PAN_SLACK_PER_ZOOM: f32 = 300.0;

// ==========================================================================
// Double-Tap Defaults
// ==========================================================================

/// Default window between two presses that counts as a double-tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Maximum distance in pixels between two presses that still counts
/// as a double-tap on the same target.
pub const DOUBLE_TAP_SLOP_PX: f32 = 32.0;
