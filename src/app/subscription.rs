// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and touch events are translated into gallery
//! [`InputEvent`]s. The subscription only exists while a project is mounted,
//! so nothing reaches the event hub once the project view is gone.

use super::Message;
use crate::domain::gallery::{InputEvent, Key};
use iced::{event, keyboard, touch, Event, Subscription};

/// Creates the input subscription for the mounted state.
pub fn create_input_subscription(project_mounted: bool) -> Subscription<Message> {
    if !project_mounted {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| {
        map_event(&event, status).map(Message::Input)
    })
}

/// Translates a native event into gallery input.
///
/// Keyboard events already captured by a widget are dropped. Touch events are
/// always forwarded so a swipe that starts on a control is still recognized.
pub fn map_event(event: &Event, status: event::Status) -> Option<InputEvent> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(InputEvent::KeyDown(map_key(key))),
            event::Status::Captured => None,
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(InputEvent::TouchStart { x: position.x })
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(InputEvent::TouchEnd { x: position.x })
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(InputEvent::TouchCancel),
        _ => None,
    }
}

/// Maps a logical key to the keys the gallery distinguishes.
#[must_use]
pub fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Key::ArrowRight,
        _ => Key::Other,
    }
}
