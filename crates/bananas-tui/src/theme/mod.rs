//! Centralized theme for the tester UI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;

/// Frames of the in-flight spinner
pub const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Spinner glyph for an animation frame counter
pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}
