// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer layer.
//!
//! The backdrop covers the whole window and closes the viewer when clicked.
//! The enlarged picture is opaque so clicks on it do not reach the backdrop.

use crate::domain::gallery::ClickTarget;
use crate::gallery::OverlayFrame;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::picture;
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

pub fn view<'a>(frame: &OverlayFrame) -> Element<'a, ClickTarget> {
    let stage = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_y(Vertical::Center)
        .push(control("◀", ClickTarget::PreviousArrow))
        .push(opaque(
            Container::new(picture::view(&frame.image))
                .width(Length::Fill)
                .height(Length::Fill),
        ))
        .push(control("▶", ClickTarget::NextArrow));

    let backdrop = mouse_area(
        Container::new(stage)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_release(ClickTarget::OverlayClose);

    let close = Container::new(control("✕", ClickTarget::OverlayClose))
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right);

    let counter = Container::new(
        Container::new(Text::new(frame.position_label()).size(typography::BODY))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::SM)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(close)
        .push(counter)
        .into()
}

fn control<'a>(glyph: &'static str, target: ClickTarget) -> Element<'a, ClickTarget> {
    button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .on_press(target)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_STRONG,
            opacity::OVERLAY_PRESSED,
        ))
        .into()
}
