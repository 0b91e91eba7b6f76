// SPDX-License-Identifier: MPL-2.0
//! Translation of native iced events into viewer input.

use crate::story::Event;
use iced::{event, keyboard, mouse, touch, Point};

/// Viewer-relevant part of a native event.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A keyboard shortcut mapped straight to a playback event.
    Key(Event),
    PointerMoved(Point),
    PointerPressed(Option<Point>),
    PointerReleased(Option<Point>),
    PointerLost,
}

/// Keyboard shortcuts: arrows navigate, space pauses, escape closes, `m` mutes.
#[must_use]
pub fn key_event(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Event> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Event::Previous),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Event::Next),
        keyboard::Key::Named(keyboard::key::Named::Space) => Some(Event::TogglePause),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Event::Close),
        keyboard::Key::Character(c) if c.as_str().eq_ignore_ascii_case("m") => {
            Some(Event::ToggleMute)
        }
        _ => None,
    }
}

/// Shortcut for a key press, unless a widget (the reply composer) already
/// consumed it.
#[must_use]
pub fn key_input(
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
    status: event::Status,
) -> Option<Input> {
    match status {
        event::Status::Captured => None,
        event::Status::Ignored => key_event(key, modifiers).map(Input::Key),
    }
}

/// Filters native events for the viewer.
///
/// Events captured by a widget are dropped: a button click is never also
/// read as a tap, and typing in the composer never triggers a shortcut.
#[must_use]
pub fn route(event: &event::Event, status: event::Status) -> Option<Input> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            key_input(key, *modifiers, status)
        }
        _ if matches!(status, event::Status::Captured) => None,
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Input::PointerMoved(*position))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Input::PointerPressed(None))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Input::PointerReleased(None))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Input::PointerLost),
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Input::PointerPressed(Some(*position)))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Input::PointerReleased(Some(*position)))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Input::PointerLost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::{window, Size};

    fn press(key: keyboard::Key) -> Option<Event> {
        key_event(&key, keyboard::Modifiers::default())
    }

    #[test]
    fn arrows_space_and_escape_map_to_playback_events() {
        assert_eq!(press(keyboard::Key::Named(Named::ArrowLeft)), Some(Event::Previous));
        assert_eq!(press(keyboard::Key::Named(Named::ArrowRight)), Some(Event::Next));
        assert_eq!(press(keyboard::Key::Named(Named::Space)), Some(Event::TogglePause));
        assert_eq!(press(keyboard::Key::Named(Named::Escape)), Some(Event::Close));
        assert_eq!(press(keyboard::Key::Named(Named::ArrowUp)), None);
    }

    #[test]
    fn m_toggles_mute_without_modifiers() {
        assert_eq!(
            press(keyboard::Key::Character("m".into())),
            Some(Event::ToggleMute)
        );
        assert_eq!(
            press(keyboard::Key::Character("M".into())),
            Some(Event::ToggleMute)
        );
        assert_eq!(
            key_event(
                &keyboard::Key::Character("m".into()),
                keyboard::Modifiers::ALT
            ),
            None
        );
    }

    #[test]
    fn captured_pointer_events_are_dropped() {
        let event = event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(route(&event, event::Status::Captured), None);
        assert_eq!(
            route(&event, event::Status::Ignored),
            Some(Input::PointerPressed(None))
        );
    }

    #[test]
    fn keys_consumed_by_the_composer_are_not_shortcuts() {
        let space = keyboard::Key::Named(Named::Space);
        assert_eq!(
            key_input(&space, keyboard::Modifiers::default(), event::Status::Captured),
            None
        );
        assert_eq!(
            key_input(&space, keyboard::Modifiers::default(), event::Status::Ignored),
            Some(Input::Key(Event::TogglePause))
        );
    }

    #[test]
    fn window_events_are_not_viewer_input() {
        let event = event::Event::Window(window::Event::Resized(Size::new(390.0, 844.0)));
        assert_eq!(route(&event, event::Status::Ignored), None);
    }
}
