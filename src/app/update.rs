// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::domain::gallery::{ClickTarget, InputEvent, SwipeThreshold};
use crate::gallery::{EventHub, ProjectView};
use iced::Task;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub catalog: &'a Catalog,
    pub threshold: SwipeThreshold,
    pub hub: &'a EventHub,
    pub project: &'a mut Option<ProjectView>,
}

/// Routes a message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::OpenProject(index) => handle_open_project(ctx, index),
        Message::BackToList => handle_back_to_list(ctx),
        Message::Input(event) => handle_input(ctx, &event),
        Message::Click(target) => handle_click(ctx, target),
    }
    Task::none()
}

/// Mounts a project, replacing any project that is currently mounted.
fn handle_open_project(ctx: &mut UpdateContext<'_>, index: usize) {
    let Some(project) = ctx.catalog.get(index) else {
        log::warn!(
            "project {index} does not exist (catalog has {})",
            ctx.catalog.len()
        );
        return;
    };
    let images = project.image_set();
    let view = match ctx.project.take() {
        Some(current) => current.switch_project(ctx.hub, images),
        None => ProjectView::mount(ctx.hub, images, ctx.threshold),
    };
    log::debug!("opened project \"{}\"", project.title);
    *ctx.project = Some(view);
    *ctx.screen = Screen::Project(index);
}

fn handle_back_to_list(ctx: &mut UpdateContext<'_>) {
    *ctx.project = None;
    *ctx.screen = Screen::ProjectList;
}

fn handle_input(ctx: &mut UpdateContext<'_>, event: &InputEvent) {
    let invoked = ctx.hub.dispatch(event);
    log::trace!("{event:?} reached {invoked} listener(s)");
}

fn handle_click(ctx: &mut UpdateContext<'_>, target: ClickTarget) {
    if let Some(view) = ctx.project.as_ref() {
        view.click(target);
    }
}
