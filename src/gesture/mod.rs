// SPDX-License-Identifier: MPL-2.0
//! Gesture engine modules
//!
//! The viewport interaction core, separated from any toolkit event types:
//! touch geometry, bounded zoom and pan state, and the state machine that
//! interprets the classified input stream.

pub mod engine;
pub mod pan;
pub mod touch;
pub mod zoom;

// Re-export commonly used types for convenience
pub use engine::{GestureEngine, GesturePhase, InputEvent};
pub use pan::PanState;
pub use zoom::{ZoomLevel, ZoomState};
