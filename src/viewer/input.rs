// SPDX-License-Identifier: MPL-2.0
//! Platform input translation
//!
//! The thin adapter between `iced_core` raw events and the classified
//! [`InputEvent`](crate::gesture::InputEvent) stream the engine consumes.
//! Keeping this layer outside the engine keeps the gesture math free of
//! toolkit event types and unit-testable without a windowing system.
//!
//! One translator exists per viewer session and carries the small amount
//! of bookkeeping raw events need: the active finger list in arrival
//! order, the last cursor position (press events carry none), whether the
//! primary button is down, and the previous press for double-tap
//! detection.

use crate::config::{Config, DOUBLE_TAP_SLOP_PX};
use crate::gesture::engine::InputEvent;
use iced_core::{mouse, touch, Event, Point};
use std::time::{Duration, Instant};

/// Translates raw mouse/touch events into classified input events.
///
/// Dropped together with its session; no listener state outlives the
/// viewer.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    /// Active fingers in arrival order, mirroring a platform touch list.
    touches: Vec<(touch::Finger, Point)>,
    /// Last known cursor position.
    cursor: Point,
    /// Whether the primary mouse button is held.
    pointer_down: bool,
    /// Previous single press, for double-tap detection.
    last_press: Option<(Instant, Point)>,
    /// Window within which two presses count as a double-tap.
    double_tap_window: Duration,
}

impl InputTranslator {
    /// Creates a translator using the configured double-tap window.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            touches: Vec::new(),
            cursor: Point::ORIGIN,
            pointer_down: false,
            last_press: None,
            double_tap_window: Duration::from_millis(config.double_tap_window_ms()),
        }
    }

    /// Translates one raw event into zero or more classified events.
    ///
    /// A press that completes a double-tap yields the press event followed
    /// by [`InputEvent::DoubleTap`]; the engine tolerates both.
    pub fn translate(&mut self, event: &Event) -> Vec<InputEvent> {
        match event {
            Event::Mouse(mouse_event) => self.translate_mouse(mouse_event),
            Event::Touch(touch_event) => self.translate_touch(*touch_event),
            _ => Vec::new(),
        }
    }

    fn translate_mouse(&mut self, event: &mouse::Event) -> Vec<InputEvent> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = *position;
                if self.pointer_down {
                    vec![InputEvent::PointerMoved(*position)]
                } else {
                    Vec::new()
                }
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                self.pointer_down = true;
                let mut events = vec![InputEvent::PointerPressed(self.cursor)];
                if self.register_press(self.cursor) {
                    events.push(InputEvent::DoubleTap);
                }
                events
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.pointer_down = false;
                vec![InputEvent::PointerReleased]
            }
            mouse::Event::WheelScrolled { delta } => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => {
                        *y
                    }
                };
                if y == 0.0 {
                    // Horizontal-only scroll; not a zoom gesture.
                    Vec::new()
                } else {
                    // iced reports scroll-up as positive; the engine follows
                    // the wheel convention where positive delta zooms out.
                    vec![InputEvent::Wheel { delta_y: -y }]
                }
            }
            _ => Vec::new(),
        }
    }

    fn translate_touch(&mut self, event: touch::Event) -> Vec<InputEvent> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.upsert_finger(id, position);
                let mut events = vec![InputEvent::TouchesBegan(self.points())];
                if self.touches.len() == 1 && self.register_press(position) {
                    events.push(InputEvent::DoubleTap);
                }
                events
            }
            touch::Event::FingerMoved { id, position } => {
                self.upsert_finger(id, position);
                vec![InputEvent::TouchesMoved(self.points())]
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.touches.retain(|(finger, _)| *finger != id);
                vec![InputEvent::TouchesEnded(self.points())]
            }
        }
    }

    fn upsert_finger(&mut self, id: touch::Finger, position: Point) {
        if let Some(entry) = self.touches.iter_mut().find(|(finger, _)| *finger == id) {
            entry.1 = position;
        } else {
            self.touches.push((id, position));
        }
    }

    fn points(&self) -> Vec<Point> {
        self.touches.iter().map(|(_, position)| *position).collect()
    }

    /// Records a press and reports whether it completed a double-tap.
    /// A completed double-tap consumes the stored press, so a triple tap
    /// does not fire twice.
    fn register_press(&mut self, position: Point) -> bool {
        let now = Instant::now();
        if let Some((previous, at)) = self.last_press {
            let close_in_time = now.duration_since(previous) <= self.double_tap_window;
            let close_in_space = position.distance(at) <= DOUBLE_TAP_SLOP_PX;
            if close_in_time && close_in_space {
                self.last_press = None;
                return true;
            }
        }
        self.last_press = Some((now, position));
        false
    }
}
