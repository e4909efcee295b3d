// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! The gesture engine never loads or decodes media; it only needs to know
//! whether the current item is zoomable.

/// Represents different kinds of media in a lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image (JPEG, PNG, WebP, etc.)
    Image,
    /// Video clip with its own native playback affordances
    Video,
}

impl MediaKind {
    /// Returns whether zoom and pan gestures apply to this kind of media.
    ///
    /// Videos keep their native scrub/volume affordances, so the viewport
    /// never zooms or pans them.
    #[must_use]
    pub fn is_zoomable(self) -> bool {
        matches!(self, MediaKind::Image)
    }
}

/// A single entry in the lightbox, owned by the caller's gallery data
/// source and referenced read-only by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Where the media lives. Opaque to the engine; loading and fallback
    /// for broken URLs happen in the surrounding media element.
    url: String,
    /// Image or video.
    kind: MediaKind,
}

impl MediaItem {
    /// Creates a new media item.
    #[must_use]
    pub fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    /// Convenience constructor for an image item.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::new(url, MediaKind::Image)
    }

    /// Convenience constructor for a video item.
    #[must_use]
    pub fn video(url: impl Into<String>) -> Self {
        Self::new(url, MediaKind::Video)
    }

    /// Returns the media URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the media kind.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Returns whether zoom and pan gestures apply to this item.
    #[must_use]
    pub fn is_zoomable(&self) -> bool {
        self.kind.is_zoomable()
    }
}
