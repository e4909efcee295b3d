// SPDX-License-Identifier: MPL-2.0
//! Viewer session state
//!
//! One `ViewerSession` exists per open lightbox. It holds the fixed item
//! list, the index of the visible slide, and the gesture engine for the
//! current item. Nothing here is shared between sessions or persisted
//! across opens.

use crate::config::Config;
use crate::domain::media::MediaItem;
use crate::gesture::engine::{GestureEngine, GesturePhase, InputEvent};
use crate::gesture::zoom::ZoomLevel;
use iced_core::Vector;

/// Per-open viewer state: the media list, the visible slide, and the
/// viewport gesture engine.
///
/// The visible index is authoritative in the external slide controller;
/// the session mirrors it and only reads it to decide whether the current
/// item is zoomable. Zoom and pan never carry across slides: every slide
/// selection resets the engine.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    items: Vec<MediaItem>,
    current_index: usize,
    engine: GestureEngine,
}

impl ViewerSession {
    /// Creates a session for the given media list, starting at
    /// `start_index` (clamped into range).
    #[must_use]
    pub fn new(items: Vec<MediaItem>, start_index: usize, config: &Config) -> Self {
        let current_index = clamp_index(start_index, items.len());
        let zoomable = items
            .get(current_index)
            .is_some_and(MediaItem::is_zoomable);

        Self {
            items,
            current_index,
            engine: GestureEngine::new(zoomable, config.wheel_zoom_step()),
        }
    }

    /// Returns the media items shown by this session.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the session has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the visible slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the visible media item, if any.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.items.get(self.current_index)
    }

    /// Returns whether the visible item is a video.
    #[must_use]
    pub fn is_current_video(&self) -> bool {
        self.current_item().is_some_and(|item| !item.is_zoomable())
    }

    /// Switches to a new visible slide and resets the viewport.
    ///
    /// This is the cross-slide invariant: zoom returns to rest, pan to
    /// center, and the gesture phase to idle, unconditionally — including
    /// re-selection of the same index.
    pub fn select_slide(&mut self, index: usize) {
        self.current_index = clamp_index(index, self.items.len());
        let zoomable = self
            .current_item()
            .is_some_and(MediaItem::is_zoomable);
        self.engine.set_zoomable(zoomable);
        self.engine.reset();
    }

    /// Feeds one classified input event to the gesture engine.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.engine.handle(event);
    }

    /// Zoom-in toolbar button.
    pub fn zoom_in(&mut self) {
        self.engine.zoom_in();
    }

    /// Zoom-out toolbar button.
    pub fn zoom_out(&mut self) {
        self.engine.zoom_out();
    }

    /// Reset-zoom toolbar button.
    pub fn reset_zoom(&mut self) {
        self.engine.reset();
    }

    /// Returns the current zoom level.
    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.engine.zoom()
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.engine.pan_offset()
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.engine.phase()
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
