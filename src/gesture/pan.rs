// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! Owns the 2D translation offset of the zoomed viewport and the
//! grab-and-drag anchor. The offset is bounded per axis by a constant
//! slack proportional to the zoom factor, which allows rubber-band
//! overshoot past the image edges without content-aware bounds math.

use crate::config::PAN_SLACK_PER_ZOOM;
use crate::gesture::zoom::ZoomLevel;
use iced_core::{Point, Vector};

/// Anchor recorded when a drag starts: where the pointer went down and
/// what the offset was at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer position at drag start.
    pub pointer_start: Point,
    /// Pan offset at drag start.
    pub pan_start: Vector,
}

/// Manages the pan offset and drag anchor for the lightbox viewport.
///
/// Panning is only meaningful while zoomed in; the gesture engine never
/// starts a drag at the rest zoom. A drag update without a recorded anchor
/// (a move event that never saw a down event) is a no-op.
#[derive(Debug, Clone, Default)]
pub struct PanState {
    offset: Vector,
    anchor: Option<DragAnchor>,
}

impl PanState {
    /// Returns the current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Returns whether a drag is currently anchored.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Starts a drag at the given pointer position, capturing the current
    /// offset as the base the drag accumulates onto.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.anchor = Some(DragAnchor {
            pointer_start: pointer,
            pan_start: self.offset,
        });
    }

    /// Re-anchors an in-progress drag at a new pointer position without
    /// moving the content (used when a pinch collapses to a single finger).
    pub fn rebase_drag(&mut self, pointer: Point) {
        self.begin_drag(pointer);
    }

    /// Ends the drag, keeping the accumulated offset.
    pub fn end_drag(&mut self) {
        self.anchor = None;
    }

    /// Moves the offset to follow the pointer, clamping each axis
    /// independently into `[-300 × zoom, +300 × zoom]`.
    pub fn drag_to(&mut self, pointer: Point, zoom: ZoomLevel) {
        let Some(anchor) = self.anchor else {
            return;
        };

        let delta = pointer - anchor.pointer_start;
        let max_pan = PAN_SLACK_PER_ZOOM * zoom.factor();

        self.offset = Vector::new(
            (anchor.pan_start.x + delta.x).clamp(-max_pan, max_pan),
            (anchor.pan_start.y + delta.y).clamp(-max_pan, max_pan),
        );
    }

    /// Centers the viewport and drops any drag anchor. Invoked by every
    /// path that returns the zoom to rest.
    pub fn reset(&mut self) {
        self.offset = Vector::new(0.0, 0.0);
        self.anchor = None;
    }
}
