// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{mouse, touch, Event, Point, Rectangle, Size};
use pinch_lens::config::{self, Config};
use pinch_lens::ui::gestures::GestureTracker;
use pinch_lens::ui::state::ViewportState;
use pinch_lens::ui::zoomable::{
    container_ref, GestureEvent, GesturePhase, PanEvent, PinchEvent, TopLevelWindow,
    TransitionStatus, ZoomableImage,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn gallery_viewport(scroll_y: f32) -> Rc<RefCell<ViewportState>> {
    let viewport = Rc::new(RefCell::new(ViewportState::default()));
    viewport
        .borrow_mut()
        .scroll_to(AbsoluteOffset { x: 0.0, y: scroll_y });
    viewport
}

fn zoomable_thumbnail(viewport: &Rc<RefCell<ViewportState>>) -> ZoomableImage {
    let mut thumbnail = ZoomableImage::new(None);
    thumbnail.set_bounds(Rectangle::new(Point::new(16.0, 500.0), Size::new(200.0, 100.0)));
    thumbnail.enable_zoom(
        Some(container_ref(viewport)),
        Some(TopLevelWindow::new(Size::new(480.0, 720.0))),
    );
    thumbnail
}

fn finger(event: touch::Event, tracker: &mut GestureTracker, bounds: Rectangle) -> Vec<GestureEvent> {
    tracker.handle_event(&Event::Touch(event), bounds, mouse::Cursor::Unavailable)
}

#[test]
fn pinch_pan_and_release_through_public_api() {
    let viewport = gallery_viewport(300.0);
    let mut thumbnail = zoomable_thumbnail(&viewport);

    thumbnail.on_pinch(PinchEvent {
        phase: GesturePhase::Began,
        scale: 1.0,
    });
    thumbnail.on_pinch(PinchEvent {
        phase: GesturePhase::Changed,
        scale: 2.0,
    });
    thumbnail.on_pan(PanEvent {
        phase: GesturePhase::Changed,
        translation: iced::Vector::new(40.0, 0.0),
    });

    assert!(!viewport.borrow().scroll_enabled);
    let overlay = thumbnail.overlay().expect("overlay exists once zoom is enabled");
    assert_abs_diff_eq!(overlay.image.frame.y, 200.0);
    assert_abs_diff_eq!(overlay.image.transform.scale, 2.0);
    assert_abs_diff_eq!(overlay.image.transform.translation.x, 20.0);
    assert!(thumbnail.opacity().is_hidden());

    thumbnail.on_pinch(PinchEvent {
        phase: GesturePhase::Ended,
        scale: 2.0,
    });
    assert!(viewport.borrow().scroll_enabled);
    assert!(thumbnail.is_animating());

    let start = Instant::now();
    assert_eq!(thumbnail.tick(start), TransitionStatus::Running);
    assert_eq!(
        thumbnail.tick(start + Duration::from_secs(1)),
        TransitionStatus::Completed
    );

    let presentation = thumbnail.presentation();
    let overlay = presentation.overlay.expect("overlay stays attached");
    assert!(overlay.transform.is_identity());
    assert!(!overlay.is_visible());
    assert!(presentation.thumbnail_transform.is_identity());
}

#[test]
fn touch_spread_drives_thumbnail_zoom() {
    let viewport = gallery_viewport(0.0);
    let mut thumbnail = zoomable_thumbnail(&viewport);
    let bounds = thumbnail.bounds();
    let mut tracker = GestureTracker::new();

    let mut reports = Vec::new();
    reports.extend(finger(
        touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(100.0, 550.0),
        },
        &mut tracker,
        bounds,
    ));
    reports.extend(finger(
        touch::Event::FingerPressed {
            id: touch::Finger(2),
            position: Point::new(140.0, 550.0),
        },
        &mut tracker,
        bounds,
    ));
    reports.extend(finger(
        touch::Event::FingerMoved {
            id: touch::Finger(2),
            position: Point::new(220.0, 550.0),
        },
        &mut tracker,
        bounds,
    ));
    for report in reports {
        thumbnail.handle_gesture(report);
    }

    assert!(tracker.is_pinching());
    assert!(thumbnail.interaction().is_zooming());
    assert!(!viewport.borrow().scroll_enabled);

    for report in finger(
        touch::Event::FingerLifted {
            id: touch::Finger(2),
            position: Point::new(220.0, 550.0),
        },
        &mut tracker,
        bounds,
    ) {
        thumbnail.handle_gesture(report);
    }

    assert!(!tracker.is_pinching());
    assert!(!thumbnail.interaction().is_zooming());
    assert!(thumbnail.is_animating());
    assert!(viewport.borrow().scroll_enabled);
}

#[test]
fn gallery_settings_survive_a_round_trip() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("PinchLens").join("settings.toml");

    let config = Config {
        last_directory: Some(PathBuf::from("/home/user/pictures")),
        thumbnail_height: Some(2000.0),
    };
    config::save_to_path(&config, &path).expect("failed to write settings");

    let loaded = config::load_from_path(&path).expect("failed to read settings");
    assert_eq!(loaded, config);
    assert_abs_diff_eq!(
        loaded.thumbnail_height(),
        config::MAX_THUMBNAIL_HEIGHT
    );
}

#[test]
fn corrupted_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "thumbnail_height = \"tall\"").expect("failed to write settings");

    let loaded = config::load_from_path(&path).expect("fallback never errors");
    assert_eq!(loaded, Config::default());
}
