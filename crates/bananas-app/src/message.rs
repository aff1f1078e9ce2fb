//! Message types for the application (TEA pattern)

use bananas_core::TestResult;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from the presentation
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Select a framework by its `value`
    SelectFramework(String),
    /// Select an ORM by its `value`
    SelectOrm(String),
    /// Select an endpoint by its `path`
    SelectEndpoint(String),
    /// Move the focused selector to the previous entry
    SelectPrevious,
    /// Move the focused selector to the next entry
    SelectNext,
    /// Jump the focused selector to its first entry
    SelectFirst,
    /// Jump the focused selector to its last entry
    SelectLast,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,

    // ─────────────────────────────────────────────────────────
    // Results Panel Messages
    // ─────────────────────────────────────────────────────────
    /// Page up in the response view
    PageUp,
    /// Page down in the response view
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Test Run Messages
    // ─────────────────────────────────────────────────────────
    /// Start a run against the current selection
    RunTest,
    /// A spawned run has published its result
    TestFinished { result: Box<TestResult> },
}
