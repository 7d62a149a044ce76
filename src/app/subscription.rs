// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to gallery messages. Window close requests are
//! always forwarded; keyboard shortcuts only when enabled in the config.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, window, Event, Subscription};

/// Creates the event subscription.
///
/// `listen_with` takes a plain function, so the keyboard setting selects
/// between two routers instead of being captured.
pub fn create_event_subscription(keyboard_navigation: bool) -> Subscription<Message> {
    if keyboard_navigation {
        event::listen_with(route_with_shortcuts)
    } else {
        event::listen_with(route_window_events)
    }
}

fn route_window_events(
    event: Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    }
}

fn route_with_shortcuts(
    event: Event,
    status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    if let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = &event {
        // Keys already consumed by a focused widget are left alone
        return match status {
            event::Status::Ignored => shortcut(key, *modifiers).map(Message::Gallery),
            event::Status::Captured => None,
        };
    }

    route_window_events(event, status, window_id)
}

/// Maps a key press to a gallery message.
///
/// Left/Right navigate, `d` toggles the description. Presses combined with
/// Ctrl/Cmd or Alt are not shortcuts.
pub(crate) fn shortcut(key: &Key, modifiers: Modifiers) -> Option<gallery::Message> {
    if modifiers.command() || modifiers.control() || modifiers.alt() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        Key::Character(c) if c.eq_ignore_ascii_case("d") => {
            Some(gallery::Message::ToggleDescription)
        }
        _ => None,
    }
}
