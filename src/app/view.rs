// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::gallery::ProjectView;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{carousel, overlay, styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub project: Option<&'a ProjectView>,
    pub notice: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view = match (ctx.screen, ctx.project) {
        (Screen::Project(index), Some(project)) => view_project(ctx.catalog, index, project),
        _ => view_project_list(ctx.catalog),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(notice) = ctx.notice {
        column = column.push(
            Container::new(Text::new(notice).size(typography::CAPTION))
                .padding(spacing::XS)
                .style(|_theme: &iced::Theme| iced::widget::container::Style {
                    text_color: Some(palette::WARNING_500),
                    ..Default::default()
                }),
        );
    }
    column
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_project_list(catalog: &Catalog) -> Element<'_, Message> {
    let heading = Text::new("Projects").size(typography::TITLE_LG);

    let list = if catalog.is_empty() {
        Column::new().push(
            Text::new("No projects. Pass images on the command line or set a catalog.")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
    } else {
        catalog
            .projects
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::XS), |list, (index, project)| {
                let label = format!("{}  ({})", project.title, project.images.len());
                list.push(
                    button(Text::new(label).size(typography::BODY))
                        .width(Length::Fixed(sizing::LIST_WIDTH))
                        .padding(spacing::SM)
                        .on_press(Message::OpenProject(index))
                        .style(styles::button_primary),
                )
            })
    };

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(heading)
            .push(list),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}

fn view_project<'a>(
    catalog: &'a Catalog,
    index: usize,
    project: &'a ProjectView,
) -> Element<'a, Message> {
    let title = catalog.get(index).map_or("", |p| p.title.as_str());

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("← Projects").size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::BackToList)
                .style(styles::button_primary),
        )
        .push(Text::new(title).size(typography::TITLE_MD));

    let body: Element<'_, Message> = match project.carousel_frame() {
        Some(frame) => carousel::view(&frame).map(Message::Click),
        None => Text::new("This project has no images.")
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    };

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    match project.overlay_frame() {
        Some(frame) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(overlay::view(&frame).map(Message::Click))
            .into(),
        None => page.into(),
    }
}
