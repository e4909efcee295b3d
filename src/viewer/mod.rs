// SPDX-License-Identifier: MPL-2.0
//! Viewer modules
//!
//! The session lifecycle around the gesture engine: per-open state, the
//! carousel synchronization seam, the render-ready presentation mapping,
//! and the raw-event translation layer.

pub mod input;
pub mod presentation;
pub mod session;
pub mod sync;

// Re-export commonly used types for convenience
pub use input::InputTranslator;
pub use presentation::{CursorAffordance, Presentation, ViewTransform};
pub use session::ViewerSession;
pub use sync::{SlideController, ViewportSync};
