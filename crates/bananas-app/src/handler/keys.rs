//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the focused control
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        // 'r' runs from anywhere
        InputKey::Char('r') => Some(Message::RunTest),

        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ if state.focus.is_selector() => handle_key_selector(key),
        _ => handle_key_run_button(key),
    }
}

/// A focused selector behaves like an open dropdown
fn handle_key_selector(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        // Confirm and move on
        InputKey::Enter => Some(Message::FocusNext),
        _ => None,
    }
}

fn handle_key_run_button(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::RunTest),
        InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrevious),
        _ => None,
    }
}
