//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. Headless mode turns them into NDJSON.

use bananas_core::{Selection, TestResult};

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    /// The selection changed; `url` is what the next run will hit
    SelectionChanged { selection: Selection, url: String },

    // ─────────────────────────────────────────────────────────
    // Test Runs
    // ─────────────────────────────────────────────────────────
    /// A run was accepted and is in flight
    RunStarted { selection: Selection, url: String },

    /// A run published its result
    ResultPublished { result: TestResult },

    /// The in-flight flag was cleared
    RunFinished,

    /// A run was requested while another was in flight
    RunRejected,

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event type as a string, for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::SelectionChanged { .. } => "selection_changed",
            EngineEvent::RunStarted { .. } => "run_started",
            EngineEvent::ResultPublished { .. } => "result_published",
            EngineEvent::RunFinished => "run_finished",
            EngineEvent::RunRejected => "run_rejected",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        assert_eq!(EngineEvent::RunRejected.event_type(), "run_rejected");
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        let selection = bananas_core::catalogs().default_selection();
        let event = EngineEvent::SelectionChanged {
            selection,
            url: "http://localhost:8081/health".into(),
        };
        assert_eq!(event.event_type(), "selection_changed");
    }
}
