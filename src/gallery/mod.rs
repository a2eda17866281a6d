// SPDX-License-Identifier: MPL-2.0
//! Image carousel and full-screen viewer engine.
//!
//! Input flows one way: keyboard, touch and click events enter through a
//! [`ProjectView`], touch pairs go through the [`GestureRecognizer`], every
//! index change goes through the [`NavigationController`], and the resulting
//! [`GalleryState`] change is pushed to the inline carousel and the overlay
//! before control returns to the caller.

pub mod carousel;
pub mod gesture;
pub mod listeners;
pub mod navigation;
pub mod overlay;
pub mod state;
pub mod view;

pub use carousel::{CarouselFrame, InlineCarousel};
pub use gesture::{GestureRecognizer, GestureState};
pub use listeners::{EventHub, ListenerGuard, ListenerId};
pub use navigation::{transition, NavAction, NavigationController};
pub use overlay::{OverlayFrame, ViewerOverlay};
pub use state::{GalleryObserver, GalleryState, RenderFrame, SubscriberId};
pub use view::ProjectView;
