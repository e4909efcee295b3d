// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the lightbox viewer: open, gesture, slide
//! change, close, driven through the public API the host UI would use.

use approx::assert_abs_diff_eq;
use iced_core::{mouse, touch, Event, Point};
use lightbox::config::Config;
use lightbox::domain::media::MediaItem;
use lightbox::gesture::engine::InputEvent;
use lightbox::viewer::input::InputTranslator;
use lightbox::viewer::presentation::{CursorAffordance, Presentation};
use lightbox::viewer::sync::{SlideController, ViewportSync};

#[derive(Default)]
struct RecordingCarousel {
    seeks: Vec<(usize, bool)>,
}

impl SlideController for RecordingCarousel {
    fn seek_to(&mut self, index: usize, animate: bool) {
        self.seeks.push((index, animate));
    }
}

fn three_image_gallery() -> Vec<MediaItem> {
    vec![
        MediaItem::image("https://cdn.example/listing/1.jpg"),
        MediaItem::image("https://cdn.example/listing/2.jpg"),
        MediaItem::image("https://cdn.example/listing/3.jpg"),
    ]
}

#[test]
fn zoom_pan_then_slide_change_resets_viewport_and_controls() {
    let mut sync = ViewportSync::new(Config::default());
    let mut carousel = RecordingCarousel::default();
    sync.on_open(three_image_gallery(), 1, &mut carousel);
    assert_eq!(carousel.seeks, vec![(1, false)]);

    let session = sync.session_mut().expect("viewer is open");
    session.zoom_in();
    assert_abs_diff_eq!(session.zoom().factor(), 1.5);
    session.zoom_in();
    assert_abs_diff_eq!(session.zoom().factor(), 2.25);

    session.handle_input(InputEvent::PointerPressed(Point::new(0.0, 0.0)));
    session.handle_input(InputEvent::PointerMoved(Point::new(100.0, 50.0)));
    session.handle_input(InputEvent::PointerReleased);
    assert_abs_diff_eq!(session.pan_offset().x, 100.0);
    assert_abs_diff_eq!(session.pan_offset().y, 50.0);

    sync.on_slide_selected(2);

    let session = sync.session().expect("viewer is open");
    assert_eq!(session.current_index(), 2);
    assert_abs_diff_eq!(session.zoom().factor(), 1.0);
    assert_abs_diff_eq!(session.pan_offset().x, 0.0);
    assert_abs_diff_eq!(session.pan_offset().y, 0.0);

    let view = Presentation::for_session(session);
    assert!(!view.zoom_out_enabled);
    assert!(view.zoom_in_enabled);
    assert!(!view.reset_visible);
}

#[test]
fn pinch_scenario_doubles_then_clamps() {
    let mut sync = ViewportSync::new(Config::default());
    let mut carousel = RecordingCarousel::default();
    sync.on_open(three_image_gallery(), 0, &mut carousel);
    let session = sync.session_mut().expect("viewer is open");

    session.handle_input(InputEvent::TouchesBegan(vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    ]));
    session.handle_input(InputEvent::TouchesMoved(vec![
        Point::new(0.0, 0.0),
        Point::new(200.0, 0.0),
    ]));
    assert_abs_diff_eq!(session.zoom().factor(), 2.0);

    // 200 → 500 is ×2.5; the zoom clamps at 4.0 instead of reaching 5.0.
    session.handle_input(InputEvent::TouchesMoved(vec![
        Point::new(0.0, 0.0),
        Point::new(500.0, 0.0),
    ]));
    assert_abs_diff_eq!(session.zoom().factor(), 4.0);

    let view = Presentation::for_session(session);
    assert!(!view.zoom_in_enabled);
    assert!(view.zoom_out_enabled);
    assert!(view.prominent_navigation);
}

#[test]
fn wheel_out_from_2_2_lands_exactly_on_rest() {
    let mut sync = ViewportSync::new(Config::default());
    let mut carousel = RecordingCarousel::default();
    sync.on_open(three_image_gallery(), 0, &mut carousel);
    let session = sync.session_mut().expect("viewer is open");

    // Six wheel-in ticks: 1.0 → 2.2 in 0.2 steps.
    for _ in 0..6 {
        session.handle_input(InputEvent::Wheel { delta_y: -1.0 });
    }
    assert_abs_diff_eq!(session.zoom().factor(), 2.2, epsilon = 1e-5);

    session.handle_input(InputEvent::PointerPressed(Point::new(0.0, 0.0)));
    session.handle_input(InputEvent::PointerMoved(Point::new(80.0, 40.0)));
    session.handle_input(InputEvent::PointerReleased);

    for _ in 0..6 {
        session.handle_input(InputEvent::Wheel { delta_y: 1.0 });
    }
    assert_eq!(session.zoom().factor(), 1.0);
    assert_abs_diff_eq!(session.pan_offset().x, 0.0);
    assert_abs_diff_eq!(session.pan_offset().y, 0.0);
}

#[test]
fn video_slide_ignores_every_zoom_gesture() {
    let items = vec![
        MediaItem::image("https://cdn.example/listing/1.jpg"),
        MediaItem::video("https://cdn.example/listing/tour.mp4"),
    ];
    let mut sync = ViewportSync::new(Config::default());
    let mut carousel = RecordingCarousel::default();
    sync.on_open(items, 1, &mut carousel);
    let session = sync.session_mut().expect("viewer is open");

    session.handle_input(InputEvent::Wheel { delta_y: -1.0 });
    session.handle_input(InputEvent::DoubleTap);
    session.handle_input(InputEvent::TouchesBegan(vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    ]));
    session.handle_input(InputEvent::TouchesMoved(vec![
        Point::new(0.0, 0.0),
        Point::new(400.0, 0.0),
    ]));
    session.zoom_in();

    assert_abs_diff_eq!(session.zoom().factor(), 1.0);
    assert_abs_diff_eq!(session.pan_offset().x, 0.0);

    let view = Presentation::for_session(session);
    assert!(!view.zoom_controls_visible);
    assert_eq!(view.cursor, CursorAffordance::Default);
}

#[test]
fn raw_touch_events_drive_a_pinch_through_the_translator() {
    let config = Config::default();
    let mut sync = ViewportSync::new(config.clone());
    let mut carousel = RecordingCarousel::default();
    sync.on_open(three_image_gallery(), 0, &mut carousel);
    let mut translator = InputTranslator::new(&config);

    let raw_events = [
        Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(0.0, 0.0),
        }),
        Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(2),
            position: Point::new(100.0, 0.0),
        }),
        Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(2),
            position: Point::new(300.0, 0.0),
        }),
        Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(2),
            position: Point::new(300.0, 0.0),
        }),
        Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(1),
            position: Point::new(0.0, 0.0),
        }),
    ];

    for raw in &raw_events {
        for classified in translator.translate(raw) {
            sync.session_mut()
                .expect("viewer is open")
                .handle_input(classified);
        }
    }

    let session = sync.session().expect("viewer is open");
    assert_abs_diff_eq!(session.zoom().factor(), 3.0);
    assert!(!session.is_dragging());
}

#[test]
fn raw_wheel_events_zoom_through_the_translator() {
    let config = Config::default();
    let mut sync = ViewportSync::new(config.clone());
    let mut carousel = RecordingCarousel::default();
    sync.on_open(three_image_gallery(), 0, &mut carousel);
    let mut translator = InputTranslator::new(&config);

    let scroll_up = Event::Mouse(mouse::Event::WheelScrolled {
        delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
    });
    for classified in translator.translate(&scroll_up) {
        sync.session_mut()
            .expect("viewer is open")
            .handle_input(classified);
    }

    assert_abs_diff_eq!(
        sync.session().expect("viewer is open").zoom().factor(),
        1.2,
        epsilon = 1e-5
    );
}

#[test]
fn close_then_reopen_starts_clean() {
    let mut sync = ViewportSync::new(Config::default());
    let mut carousel = RecordingCarousel::default();

    sync.on_open(three_image_gallery(), 2, &mut carousel);
    sync.session_mut().expect("viewer is open").zoom_in();
    sync.on_close();
    assert!(!sync.is_open());

    sync.on_open(three_image_gallery(), 0, &mut carousel);
    let session = sync.session().expect("viewer is open");
    assert_eq!(session.current_index(), 0);
    assert!(session.zoom().is_min());
    assert_eq!(carousel.seeks, vec![(2, false), (0, false)]);
}
