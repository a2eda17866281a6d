// SPDX-License-Identifier: MPL-2.0
//! Inline carousel mirror.

use super::state::{position_label, GalleryObserver, RenderFrame};
use crate::domain::gallery::ImageRef;

/// What the inline carousel draws: the current image plus its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselFrame {
    pub image: ImageRef,
    pub index: usize,
    pub len: usize,
}

impl CarouselFrame {
    /// Human-readable position, 1-based ("3 / 7").
    #[must_use]
    pub fn position_label(&self) -> String {
        position_label(self.index, self.len)
    }
}

/// Presentation-side mirror of the inline carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineCarousel {
    displayed: Option<CarouselFrame>,
}

impl InlineCarousel {
    /// Creates a carousel already synchronized with `frame`.
    #[must_use]
    pub fn from_frame(frame: &RenderFrame) -> Self {
        Self {
            displayed: Self::render(frame),
        }
    }

    /// Projects a render frame onto the carousel. Empty sets draw nothing.
    #[must_use]
    pub fn render(frame: &RenderFrame) -> Option<CarouselFrame> {
        Some(CarouselFrame {
            image: frame.image.clone()?,
            index: frame.index?,
            len: frame.len,
        })
    }

    #[must_use]
    pub fn displayed(&self) -> Option<&CarouselFrame> {
        self.displayed.as_ref()
    }
}

impl GalleryObserver for InlineCarousel {
    fn on_change(&mut self, frame: &RenderFrame) {
        self.displayed = Self::render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_draws_nothing() {
        let frame = RenderFrame {
            image: None,
            index: None,
            len: 0,
            viewer_open: false,
        };
        assert_eq!(InlineCarousel::from_frame(&frame).displayed(), None);
    }

    #[test]
    fn carousel_renders_regardless_of_viewer_flag() {
        let frame = RenderFrame {
            image: Some(ImageRef::new("b.jpg")),
            index: Some(1),
            len: 4,
            viewer_open: true,
        };
        let carousel = InlineCarousel::from_frame(&frame);
        let shown = carousel.displayed().expect("carousel visible");
        assert_eq!(shown.image.as_str(), "b.jpg");
        assert_eq!(shown.position_label(), "2 / 4");
    }
}
