//! Terminal event polling

use bananas_app::message::Message;
use bananas_app::InputKey;
use bananas_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Poll timeout, doubles as the tick interval (20 FPS)
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What one poll produced
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    Message(Message),
    /// Terminal size changed; the next frame must be drawn
    Resize,
    /// Input we do not react to
    Ignored,
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Map one crossterm event
pub fn translate(event: Event) -> TerminalEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_event_to_input(key)
            .map(|input| TerminalEvent::Message(Message::Key(input)))
            .unwrap_or(TerminalEvent::Ignored),
        Event::Resize(_, _) => TerminalEvent::Resize,
        _ => TerminalEvent::Ignored,
    }
}

/// Poll for terminal events, yielding a tick on timeout
pub fn poll() -> Result<TerminalEvent> {
    if event::poll(POLL_INTERVAL)? {
        Ok(translate(event::read()?))
    } else {
        Ok(TerminalEvent::Message(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('r')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_shift_tab_is_back_tab() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));

        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_navigation_keys() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Home, InputKey::Home),
            (KeyCode::End, InputKey::End),
            (KeyCode::PageUp, InputKey::PageUp),
            (KeyCode::PageDown, InputKey::PageDown),
        ];
        for (code, expected) in cases {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(key_event_to_input(key), Some(expected));
        }
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_translate_press_release_and_resize() {
        let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            translate(Event::Key(press)),
            TerminalEvent::Message(Message::Key(InputKey::Enter))
        );

        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), TerminalEvent::Ignored);

        assert_eq!(translate(Event::Resize(100, 40)), TerminalEvent::Resize);
        assert_eq!(translate(Event::FocusGained), TerminalEvent::Ignored);
    }
}
