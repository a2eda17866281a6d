// SPDX-License-Identifier: MPL-2.0
//! Draws a single gallery image.
//!
//! Only local files are decoded. Remote references and missing files get a
//! text placeholder naming the reference, since fetching is left to the host.

use crate::domain::gallery::ImageRef;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{image, Container, Image, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Returns the file to decode for `image`, if it is a readable local file.
#[must_use]
pub fn local_file(image: &ImageRef) -> Option<&Path> {
    if image.is_remote() {
        return None;
    }
    let path = Path::new(image.as_str());
    path.is_file().then_some(path)
}

pub fn view<'a, Message: 'a>(image_ref: &ImageRef) -> Element<'a, Message> {
    match local_file(image_ref) {
        Some(path) => Image::new(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(
            Text::new(image_ref.to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    }
}
