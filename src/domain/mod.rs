// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure data types with no presentation dependencies.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaKind`](media::MediaKind),
//!   [`MediaItem`](media::MediaItem))

pub mod media;

pub use media::{MediaItem, MediaKind};
