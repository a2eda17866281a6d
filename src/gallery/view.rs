// SPDX-License-Identifier: MPL-2.0
//! A mounted project view.
//!
//! [`ProjectView::mount`] creates fresh gallery state for an image set and
//! registers its keyboard and touch listeners on an [`EventHub`]. The
//! listeners live exactly as long as the view: dropping it (or switching to
//! another project) unregisters them and discards all state.
//!
//! Clicks that open or close the viewer are held back while a touch is being
//! tracked. The recognizer decides: a tap applies the click, a swipe drops it.

use super::carousel::{CarouselFrame, InlineCarousel};
use super::gesture::{GestureRecognizer, GestureState};
use super::listeners::{EventHub, ListenerGuard};
use super::overlay::{OverlayFrame, ViewerOverlay};
use super::state::{GalleryObserver, GalleryState, RenderFrame, SubscriberId};
use crate::domain::gallery::{
    ClickTarget, ImageSet, InputEvent, Key, ListenerKind, SwipeSignal, SwipeThreshold,
};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// What to do with a viewer click that arrives around a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TapGate {
    /// Clicks apply immediately.
    #[default]
    Open,
    /// Click received while tracking; applied if the touch ends as a tap.
    Deferred(ClickTarget),
    /// A swipe just ended; its own release may still arrive as a click.
    AfterSwipe,
}

/// State owned by one mounted view and shared with its listeners.
#[derive(Debug)]
struct Session {
    state: GalleryState,
    gesture: GestureRecognizer,
    tap: TapGate,
    /// Copy of the recognizer state readable while the session is borrowed.
    gesture_state: Rc<Cell<GestureState>>,
}

impl Session {
    fn handle_key(&mut self, key: Key) {
        self.tap = TapGate::Open;
        match key {
            Key::ArrowLeft => {
                self.state.navigation().prev();
            }
            Key::ArrowRight => {
                self.state.navigation().next();
            }
            Key::Other => {}
        }
    }

    fn handle_touch(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::TouchStart { x } => {
                self.tap = TapGate::Open;
                self.gesture.touch_start(x);
            }
            InputEvent::TouchEnd { x } => {
                let signal = self.gesture.touch_end(x);
                let gate = std::mem::take(&mut self.tap);
                match signal {
                    Some(SwipeSignal::Advance) => {
                        self.state.navigation().next();
                    }
                    Some(SwipeSignal::Retreat) => {
                        self.state.navigation().prev();
                    }
                    None => {
                        if let TapGate::Deferred(target) = gate {
                            self.apply_click(target);
                        }
                    }
                }
                if signal.is_some() {
                    self.tap = match gate {
                        TapGate::Deferred(target) => {
                            log::trace!("swipe ended, dropping {target:?}");
                            TapGate::Open
                        }
                        _ => TapGate::AfterSwipe,
                    };
                }
            }
            InputEvent::TouchCancel => {
                self.tap = TapGate::Open;
                self.gesture.cancel();
            }
            InputEvent::KeyDown(_) => {}
        }
        self.gesture_state.set(self.gesture.state());
    }

    fn handle_click(&mut self, target: ClickTarget) {
        if target.toggles_viewer() {
            if matches!(self.gesture.state(), GestureState::Tracking { .. }) {
                log::trace!("touch in progress, deferring {target:?}");
                self.tap = TapGate::Deferred(target);
                return;
            }
            if self.tap == TapGate::AfterSwipe {
                log::trace!("release of a swipe, ignoring {target:?}");
                self.tap = TapGate::Open;
                return;
            }
        } else if self.tap == TapGate::AfterSwipe {
            self.tap = TapGate::Open;
        }
        self.apply_click(target);
    }

    fn apply_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::InlineImage(index) => self.state.open_viewer(index),
            ClickTarget::PreviousArrow => {
                self.state.navigation().prev();
            }
            ClickTarget::NextArrow => {
                self.state.navigation().next();
            }
            ClickTarget::Indicator(index) => {
                self.state.navigation().select_explicit(index);
            }
            ClickTarget::OverlayClose => self.state.close_viewer(),
        }
    }
}

/// Keeps the latest frame readable from inside other observers.
#[derive(Debug)]
struct LatestFrame(RenderFrame);

impl GalleryObserver for LatestFrame {
    fn on_change(&mut self, frame: &RenderFrame) {
        self.0 = frame.clone();
    }
}

/// Carousel and viewer for one project, wired to window-level input.
///
/// Read accessors never touch the session, so observers added with
/// [`subscribe`](Self::subscribe) may call them from `on_change`.
pub struct ProjectView {
    session: Rc<RefCell<Session>>,
    images: ImageSet,
    threshold: SwipeThreshold,
    latest: Rc<RefCell<LatestFrame>>,
    gesture_state: Rc<Cell<GestureState>>,
    carousel: Rc<RefCell<InlineCarousel>>,
    overlay: Rc<RefCell<ViewerOverlay>>,
    keyboard: ListenerGuard,
    touch: ListenerGuard,
}

impl fmt::Debug for ProjectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectView")
            .field("frame", &self.frame())
            .field("gesture", &self.gesture_state.get())
            .field("keyboard", &self.keyboard)
            .field("touch", &self.touch)
            .finish()
    }
}

impl ProjectView {
    /// Mounts a view over `images`: index 0, viewer closed, listeners live.
    pub fn mount(hub: &EventHub, images: ImageSet, threshold: SwipeThreshold) -> Self {
        let len = images.len();
        let mut state = GalleryState::new(images.clone());
        let initial = state.frame();

        let latest = Rc::new(RefCell::new(LatestFrame(initial.clone())));
        let carousel = Rc::new(RefCell::new(InlineCarousel::from_frame(&initial)));
        let overlay = Rc::new(RefCell::new(ViewerOverlay::from_frame(&initial)));
        state.subscribe(Rc::clone(&latest));
        state.subscribe(Rc::clone(&carousel));
        state.subscribe(Rc::clone(&overlay));

        let gesture_state = Rc::new(Cell::new(GestureState::Idle));
        let session = Rc::new(RefCell::new(Session {
            state,
            gesture: GestureRecognizer::new(threshold),
            tap: TapGate::Open,
            gesture_state: Rc::clone(&gesture_state),
        }));

        let weak = Rc::downgrade(&session);
        let keyboard = hub.listen(ListenerKind::Keyboard, move |event| {
            if let InputEvent::KeyDown(key) = *event {
                with_session(&weak, |session| session.handle_key(key));
            }
        });
        let weak = Rc::downgrade(&session);
        let touch = hub.listen(ListenerKind::Touch, move |event| {
            with_session(&weak, |session| session.handle_touch(event));
        });

        log::debug!("mounted project view with {len} images");
        Self {
            session,
            images,
            threshold,
            latest,
            gesture_state,
            carousel,
            overlay,
            keyboard,
            touch,
        }
    }

    /// Unmounts this view and mounts a new one for `images`.
    ///
    /// The old listeners are released before the new ones are registered, and
    /// no state carries over.
    #[must_use]
    pub fn switch_project(self, hub: &EventHub, images: ImageSet) -> Self {
        let threshold = self.threshold;
        drop(self);
        Self::mount(hub, images, threshold)
    }

    /// Handles a click on one of the carousel or overlay controls.
    ///
    /// A click issued while the view is already handling input (from an
    /// observer callback) is dropped with a warning.
    pub fn click(&self, target: ClickTarget) {
        with_session(&Rc::downgrade(&self.session), |session| {
            session.handle_click(target);
        });
    }

    /// Returns the snapshot both presentations are derived from.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        self.latest.borrow().0.clone()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.latest.borrow().0.index
    }

    #[must_use]
    pub fn viewer_open(&self) -> bool {
        self.latest.borrow().0.viewer_open
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn images(&self) -> ImageSet {
        self.images.clone()
    }

    /// Returns what the inline carousel currently shows.
    #[must_use]
    pub fn carousel_frame(&self) -> Option<CarouselFrame> {
        self.carousel.borrow().displayed().cloned()
    }

    /// Returns what the overlay currently shows, if it is visible.
    #[must_use]
    pub fn overlay_frame(&self) -> Option<OverlayFrame> {
        self.overlay.borrow().displayed().cloned()
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gesture_state.get()
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Adds an observer that is notified after every change in this view.
    ///
    /// Returns `None` when called from inside an observer callback.
    pub fn subscribe(&self, observer: impl GalleryObserver + 'static) -> Option<SubscriberId> {
        match self.session.try_borrow_mut() {
            Ok(mut session) => Some(session.state.subscribe(observer)),
            Err(_) => {
                log::warn!("project view busy, observer not added");
                None
            }
        }
    }

    /// Removes an observer added with [`subscribe`](Self::subscribe).
    ///
    /// Returns `false` if it was not registered or the view is busy.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        match self.session.try_borrow_mut() {
            Ok(mut session) => session.state.unsubscribe(id),
            Err(_) => {
                log::warn!("project view busy, observer {id:?} not removed");
                false
            }
        }
    }
}

impl Drop for ProjectView {
    fn drop(&mut self) {
        log::debug!(
            "unmounting project view (listeners {:?}, {:?})",
            self.keyboard.id(),
            self.touch.id()
        );
    }
}

/// Runs `f` against a still-mounted session. Stale callbacks do nothing.
fn with_session(session: &Weak<RefCell<Session>>, f: impl FnOnce(&mut Session)) {
    let Some(session) = session.upgrade() else {
        log::debug!("dropping input for an unmounted project view");
        return;
    };
    match session.try_borrow_mut() {
        Ok(mut session) => f(&mut session),
        Err(_) => log::warn!("project view busy, dropping re-entrant input"),
    };
}
