// SPDX-License-Identifier: MPL-2.0
use folio_gallery::catalog::Catalog;
use folio_gallery::config::{self, CatalogConfig, Config, GestureConfig};
use folio_gallery::domain::gallery::{
    ClickTarget, ImageSet, InputEvent, Key, ListenerKind, SwipeThreshold,
};
use folio_gallery::gallery::{EventHub, GalleryObserver, GestureState, ProjectView, RenderFrame};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

#[derive(Debug, Default)]
struct FrameLog {
    frames: Vec<RenderFrame>,
}

impl GalleryObserver for FrameLog {
    fn on_change(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}

fn images(count: usize) -> ImageSet {
    ImageSet::new((0..count).map(|i| format!("img/{i}.jpg")))
}

fn mount(count: usize) -> (EventHub, ProjectView) {
    let hub = EventHub::new();
    let view = ProjectView::mount(&hub, images(count), SwipeThreshold::default());
    (hub, view)
}

fn swipe(hub: &EventHub, start_x: f32, end_x: f32) {
    hub.dispatch(&InputEvent::TouchStart { x: start_x });
    hub.dispatch(&InputEvent::TouchEnd { x: end_x });
}

#[test]
fn keyboard_next_cycles_back_to_start_for_every_size() {
    for len in 1..=6 {
        for start in 0..len {
            let (hub, view) = mount(len);
            view.click(ClickTarget::Indicator(start));
            for _ in 0..len {
                hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
            }
            assert_eq!(view.current_index(), Some(start), "len {len}, start {start}");
        }
    }
}

#[test]
fn keyboard_prev_undoes_next() {
    for len in 1..=5 {
        for start in 0..len {
            let (hub, view) = mount(len);
            view.click(ClickTarget::Indicator(start));
            hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
            hub.dispatch(&InputEvent::KeyDown(Key::ArrowLeft));
            assert_eq!(view.current_index(), Some(start));
        }
    }
}

#[test]
fn empty_project_ignores_all_input() {
    let (hub, view) = mount(0);
    let log = Rc::new(RefCell::new(FrameLog::default()));
    view.subscribe(Rc::clone(&log));

    hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
    hub.dispatch(&InputEvent::KeyDown(Key::ArrowLeft));
    swipe(&hub, 300.0, 100.0);
    view.click(ClickTarget::NextArrow);
    view.click(ClickTarget::InlineImage(0));

    assert_eq!(view.current_index(), None);
    assert!(!view.viewer_open());
    assert!(view.carousel_frame().is_none());
    assert!(view.overlay_frame().is_none());
    assert!(log.borrow().frames.is_empty());
}

#[test]
fn swipe_boundary_is_exclusive() {
    let (hub, view) = mount(5);

    swipe(&hub, 300.0, 250.0);
    assert_eq!(view.current_index(), Some(0));

    swipe(&hub, 300.0, 249.0);
    assert_eq!(view.current_index(), Some(1));
}

#[test]
fn swipe_directions_and_taps() {
    let (hub, view) = mount(5);

    swipe(&hub, 300.0, 200.0);
    assert_eq!(view.current_index(), Some(1));

    swipe(&hub, 200.0, 300.0);
    assert_eq!(view.current_index(), Some(0));

    swipe(&hub, 200.0, 210.0);
    assert_eq!(view.current_index(), Some(0));
    assert_eq!(view.gesture_state(), GestureState::Idle);
}

#[test]
fn overlay_follows_shared_index_and_wraps() {
    let (hub, view) = mount(4);

    view.click(ClickTarget::InlineImage(3));
    let overlay = view.overlay_frame().expect("overlay visible");
    assert_eq!(overlay.index, 3);

    hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
    assert_eq!(view.overlay_frame().map(|f| f.index), Some(0));
    assert_eq!(view.carousel_frame().map(|f| f.index), Some(0));
}

#[test]
fn closing_overlay_keeps_position() {
    let (_hub, view) = mount(5);

    view.click(ClickTarget::InlineImage(2));
    view.click(ClickTarget::OverlayClose);
    assert!(view.overlay_frame().is_none());
    assert_eq!(view.carousel_frame().map(|f| f.index), Some(2));

    view.click(ClickTarget::InlineImage(2));
    assert_eq!(view.overlay_frame().map(|f| f.index), Some(2));
}

#[test]
fn repeated_touch_start_uses_latest_position() {
    let (hub, view) = mount(3);

    hub.dispatch(&InputEvent::TouchStart { x: 10.0 });
    hub.dispatch(&InputEvent::TouchStart { x: 300.0 });
    assert_eq!(view.gesture_state(), GestureState::Tracking { start_x: 300.0 });

    hub.dispatch(&InputEvent::TouchEnd { x: 200.0 });
    assert_eq!(view.current_index(), Some(1));
}

#[test]
fn cancelled_touch_does_not_navigate() {
    let (hub, view) = mount(3);

    hub.dispatch(&InputEvent::TouchStart { x: 300.0 });
    hub.dispatch(&InputEvent::TouchCancel);
    hub.dispatch(&InputEvent::TouchEnd { x: 100.0 });

    assert_eq!(view.current_index(), Some(0));
}

#[test]
fn unmount_releases_listeners_and_stops_updates() {
    let hub = EventHub::new();
    let view = ProjectView::mount(&hub, images(3), SwipeThreshold::default());
    let log = Rc::new(RefCell::new(FrameLog::default()));
    view.subscribe(Rc::clone(&log));
    assert_eq!(hub.listener_count_of(ListenerKind::Keyboard), 1);
    assert_eq!(hub.listener_count_of(ListenerKind::Touch), 1);

    drop(view);
    assert_eq!(hub.listener_count(), 0);

    assert_eq!(hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight)), 0);
    swipe(&hub, 300.0, 100.0);
    assert!(log.borrow().frames.is_empty());
}

#[test]
fn switching_projects_registers_exactly_one_listener_pair() {
    let hub = EventHub::new();
    let mut view = ProjectView::mount(&hub, images(3), SwipeThreshold::new(80.0));
    view.click(ClickTarget::InlineImage(2));

    for len in [5, 1, 0, 4] {
        view = view.switch_project(&hub, images(len));
        assert_eq!(hub.listener_count(), 2);
        assert_eq!(view.len(), len);
        assert!(!view.viewer_open());
        assert_eq!(view.threshold(), SwipeThreshold::new(80.0));
    }

    hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
    assert_eq!(view.current_index(), Some(1));
}

#[test]
fn observers_see_each_change_once() {
    let (hub, view) = mount(3);
    let log = Rc::new(RefCell::new(FrameLog::default()));
    let id = view.subscribe(Rc::clone(&log)).expect("view is idle");

    hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
    view.click(ClickTarget::Indicator(1));
    view.click(ClickTarget::InlineImage(1));
    view.click(ClickTarget::OverlayClose);
    view.click(ClickTarget::OverlayClose);

    let frames = &log.borrow().frames;
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].index, Some(1));
    assert!(frames[1].viewer_open);
    assert!(!frames[2].viewer_open);

    assert!(view.unsubscribe(id));
    hub.dispatch(&InputEvent::KeyDown(Key::ArrowRight));
    assert_eq!(log.borrow().frames.len(), 3);
}

#[test]
fn catalog_and_settings_drive_a_mounted_project() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let catalog_path = dir.path().join("projects.toml");
    fs::write(
        &catalog_path,
        "[[project]]\ntitle = \"Harbour\"\nimages = [\"a.jpg\", \"b.jpg\", \"c.jpg\"]\n",
    )
    .expect("Failed to write catalog");

    let settings_path = dir.path().join("settings.toml");
    let settings = Config {
        gesture: GestureConfig {
            swipe_threshold_px: Some(120.0),
        },
        catalog: CatalogConfig {
            path: Some(catalog_path.clone()),
        },
    };
    config::save_to_path(&settings, &settings_path).expect("Failed to write settings");

    let loaded = config::load_from_path(&settings_path).expect("Failed to load settings");
    let catalog_file = loaded.catalog.path.clone().expect("catalog path kept");
    let catalog = Catalog::load_from_path(&catalog_file).expect("Failed to load catalog");
    let project = catalog.get(0).expect("one project");

    let hub = EventHub::new();
    let view = ProjectView::mount(&hub, project.image_set(), loaded.swipe_threshold());

    // 100 px is below the configured 120 px threshold.
    swipe(&hub, 300.0, 200.0);
    assert_eq!(view.current_index(), Some(0));

    swipe(&hub, 300.0, 150.0);
    assert_eq!(view.current_index(), Some(1));
    assert!(view
        .carousel_frame()
        .is_some_and(|f| f.image.as_str().ends_with("b.jpg")));
}
