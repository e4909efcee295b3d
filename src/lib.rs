// SPDX-License-Identifier: MPL-2.0
//! `lightbox` is the gesture and viewport engine of a full-screen media
//! lightbox: pinch-zoom, panning, double-tap zoom toggle, wheel zoom, and
//! carousel-synchronized viewport reset.
//!
//! The engine reacts to a stream of already-classified input events
//! ([`gesture::InputEvent`]) and is independent of any particular windowing
//! toolkit; [`viewer::input`] provides the thin adapter that classifies raw
//! `iced_core` mouse and touch events. Which slide is visible is owned by an
//! external carousel, reached through the [`viewer::SlideController`] seam.

#![doc(html_root_url = "https://docs.rs/lightbox/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod viewer;

#[cfg(test)]
pub mod test_utils;
