//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Which key map applies depends on the focus.

use std::time::Duration;

use cardwall_protocol::Message;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::state::Focus;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message, using
/// the key map of `focus`.
#[must_use]
pub fn event_to_message(event: &Event, focus: Focus) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => match focus {
            Focus::Board => key_to_message(*key),
            Focus::Form => key_to_form_message(*key),
            Focus::Confirm => key_to_confirm_message(*key),
        },
        Event::Mouse(mouse) => mouse_to_message(mouse),
        Event::FocusLost => Some(Message::PointerLost),
        _ => None,
    }
}

/// Converts a left-button mouse event to a pointer message.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a key event on the wall to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Cancel keyboard drag or clear selection |
/// | Arrows | Navigate, or steer the carried item |
/// | `Space` | Pick up / drop |
/// | `b` | New board |
/// | `n` | New card |
/// | `d` | Delete board |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char(' ') => Some(Message::PickUp),
        KeyCode::Char('b') => Some(Message::NewBoard),
        KeyCode::Char('n') => Some(Message::NewCard),
        KeyCode::Char('d') => Some(Message::DeleteBoard),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event while a form is open.
///
/// Every printable character is text input; `Tab` switches fields, `Enter`
/// submits and `Esc` closes the form.
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab | KeyCode::BackTab => Some(Message::FormNextField),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}

/// Converts a key event while a delete confirmation is open.
#[must_use]
pub fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::Confirm),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::Escape),
        _ => None,
    }
}
