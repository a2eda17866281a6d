// SPDX-License-Identifier: MPL-2.0
//! Gallery state: the single source of truth shared by the inline carousel
//! and the full-screen viewer.
//!
//! Both presentations observe the same [`GalleryState`] through
//! [`GalleryObserver`] subscriptions, so they can never disagree about which
//! image is current.

use super::navigation::NavigationController;
use crate::domain::gallery::{ImageRef, ImageSet};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Snapshot handed to the presentation layer after every change.
///
/// `index` and `image` are `None` exactly when the image set is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    /// Image at the current index.
    pub image: Option<ImageRef>,
    /// Current index (0-based).
    pub index: Option<usize>,
    /// Total number of images in the set.
    pub len: usize,
    /// Whether the full-screen viewer is open.
    pub viewer_open: bool,
}

impl RenderFrame {
    /// Whether the inline carousel has anything to draw.
    #[must_use]
    pub fn shows_carousel(&self) -> bool {
        self.len > 0
    }

    /// Whether the full-screen overlay has anything to draw.
    #[must_use]
    pub fn shows_overlay(&self) -> bool {
        self.viewer_open && self.len > 0
    }

    /// Position text for the current image, `None` for an empty set.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.index.map(|index| position_label(index, self.len))
    }
}

/// 1-based position text shared by the carousel and the overlay ("3 / 7").
#[must_use]
pub fn position_label(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}

/// Receives a [`RenderFrame`] synchronously after each state change.
pub trait GalleryObserver {
    /// Called once per observable change, after the mutation is applied.
    fn on_change(&mut self, frame: &RenderFrame);
}

impl<T: GalleryObserver> GalleryObserver for Rc<RefCell<T>> {
    fn on_change(&mut self, frame: &RenderFrame) {
        self.borrow_mut().on_change(frame);
    }
}

/// Handle returned by [`GalleryState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Current index and viewer flag for one mounted image set.
pub struct GalleryState {
    images: ImageSet,
    current_index: Option<usize>,
    viewer_open: bool,
    observers: Vec<(SubscriberId, Box<dyn GalleryObserver>)>,
    next_subscriber: u64,
}

impl fmt::Debug for GalleryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryState")
            .field("len", &self.images.len())
            .field("current_index", &self.current_index)
            .field("viewer_open", &self.viewer_open)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GalleryState {
    /// Creates the state for a freshly mounted view: first image selected,
    /// viewer closed.
    #[must_use]
    pub fn new(images: ImageSet) -> Self {
        let current_index = if images.is_empty() { None } else { Some(0) };
        Self {
            images,
            current_index,
            viewer_open: false,
            observers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Returns the mounted image set.
    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the current index, or `None` for an empty set.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the image at the current index.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.current_index.and_then(|i| self.images.get(i))
    }

    /// Returns whether the full-screen viewer is open.
    #[must_use]
    pub fn viewer_open(&self) -> bool {
        self.viewer_open
    }

    /// Returns a snapshot for rendering.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            image: self.current_image().cloned(),
            index: self.current_index,
            len: self.images.len(),
            viewer_open: self.viewer_open,
        }
    }

    /// Returns the navigation controller bound to this state.
    pub fn navigation(&mut self) -> NavigationController<'_> {
        NavigationController::new(self)
    }

    /// Moves the current index. Back end of [`NavigationController`]; input
    /// handlers go through the controller instead.
    ///
    /// Out-of-range values are clamped to the nearest valid index; an empty
    /// set ignores the call.
    pub(crate) fn set_index(&mut self, index: usize) {
        let Some(target) = self.clamp_index(index) else {
            return;
        };
        if self.current_index == Some(target) {
            return;
        }
        log::debug!("gallery index {:?} -> {}", self.current_index, target);
        self.current_index = Some(target);
        self.notify();
    }

    /// Selects `index` and opens the full-screen viewer on it.
    ///
    /// The index is applied before the viewer flag, so the overlay always
    /// opens on the requested image. Ignored for an empty set.
    pub fn open_viewer(&mut self, index: usize) {
        let Some(target) = self.clamp_index(index) else {
            log::debug!("ignoring viewer open on empty gallery");
            return;
        };
        if self.viewer_open && self.current_index == Some(target) {
            return;
        }
        log::debug!("opening viewer at index {target}");
        self.current_index = Some(target);
        self.viewer_open = true;
        self.notify();
    }

    /// Closes the full-screen viewer. The current index is left untouched.
    pub fn close_viewer(&mut self) {
        if !self.viewer_open {
            return;
        }
        log::debug!("closing viewer at index {:?}", self.current_index);
        self.viewer_open = false;
        self.notify();
    }

    /// Registers an observer that is notified after every change.
    pub fn subscribe(&mut self, observer: impl GalleryObserver + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn clamp_index(&self, index: usize) -> Option<usize> {
        let last = self.images.last_index()?;
        if index > last {
            log::warn!(
                "index {index} out of range for {} images, clamping to {last}",
                self.images.len()
            );
        }
        Some(index.min(last))
    }

    fn notify(&mut self) {
        let frame = self.frame();
        for (_, observer) in &mut self.observers {
            observer.on_change(&frame);
        }
    }
}
