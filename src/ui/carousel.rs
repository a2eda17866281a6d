// SPDX-License-Identifier: MPL-2.0
//! Inline carousel: the current picture framed by previous/next arrows, with
//! one indicator dot per image and a position label underneath.
//!
//! Every interactive part reports a [`ClickTarget`]; the host forwards it to
//! the mounted project view unchanged.

use crate::domain::gallery::ClickTarget;
use crate::gallery::CarouselFrame;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::picture;
use crate::ui::styles;
use iced::mouse;
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

pub fn view<'a>(frame: &CarouselFrame) -> Element<'a, ClickTarget> {
    let picture = Container::new(picture::view(&frame.image))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .style(styles::overlay::picture_frame);
    let picture = mouse_area(picture)
        .on_release(ClickTarget::InlineImage(frame.index))
        .interaction(mouse::Interaction::Pointer);

    let stage = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(arrow("◀", ClickTarget::PreviousArrow))
        .push(picture)
        .push(arrow("▶", ClickTarget::NextArrow));

    let label = Container::new(Text::new(frame.position_label()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::SM));

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(stage)
        .push(indicators(frame.index, frame.len))
        .push(label)
        .into()
}

fn arrow<'a>(glyph: &'static str, target: ClickTarget) -> Element<'a, ClickTarget> {
    button(Text::new(glyph).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .on_press(target)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .into()
}

fn indicators<'a>(current: usize, len: usize) -> Element<'a, ClickTarget> {
    (0..len)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::DOT))
                    .height(Length::Fixed(sizing::DOT))
                    .padding(0.0)
                    .on_press(ClickTarget::Indicator(index))
                    .style(styles::button::dot(index == current)),
            )
        })
        .into()
}
