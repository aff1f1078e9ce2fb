//! Abstract input key event, independent of terminal library.
//!
//! Keeps bananas-app free of crossterm so headless mode can drive the same
//! engine. The TUI converts `crossterm::event::KeyEvent` at its boundary.

/// Keys the tester reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}
