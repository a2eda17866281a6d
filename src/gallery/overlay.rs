// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer overlay.
//!
//! The overlay keeps no index of its own: it mirrors the [`GalleryState`]
//! it is subscribed to and only decides whether there is anything to draw.
//!
//! [`GalleryState`]: super::state::GalleryState

use super::state::{position_label, GalleryObserver, RenderFrame};
use crate::domain::gallery::ImageRef;

/// What the overlay draws while it is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayFrame {
    /// Image shown full-screen.
    pub image: ImageRef,
    /// Its position in the set.
    pub index: usize,
    /// Total number of images.
    pub len: usize,
}

impl OverlayFrame {
    /// Same position text as the inline carousel.
    #[must_use]
    pub fn position_label(&self) -> String {
        position_label(self.index, self.len)
    }
}

/// Presentation-side mirror of the full-screen layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerOverlay {
    displayed: Option<OverlayFrame>,
}

impl ViewerOverlay {
    /// Creates an overlay already synchronized with `frame`.
    #[must_use]
    pub fn from_frame(frame: &RenderFrame) -> Self {
        Self {
            displayed: Self::render(frame),
        }
    }

    /// Projects a render frame onto the overlay. `None` means "draw nothing".
    #[must_use]
    pub fn render(frame: &RenderFrame) -> Option<OverlayFrame> {
        if !frame.shows_overlay() {
            return None;
        }
        Some(OverlayFrame {
            image: frame.image.clone()?,
            index: frame.index?,
            len: frame.len,
        })
    }

    /// Returns what is currently displayed, if the overlay is visible.
    #[must_use]
    pub fn displayed(&self) -> Option<&OverlayFrame> {
        self.displayed.as_ref()
    }

    /// Returns whether the overlay is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.displayed.is_some()
    }
}

impl GalleryObserver for ViewerOverlay {
    fn on_change(&mut self, frame: &RenderFrame) {
        self.displayed = Self::render(frame);
    }
}
