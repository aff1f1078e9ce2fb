//! Headless mode - NDJSON event output for scripted benchmarking
//!
//! Instead of the TUI, the tester reads one command per line on stdin and
//! writes structured JSON events to stdout, one per line. Every event has an
//! `"event"` field naming its type and a millisecond `"timestamp"`.
//!
//! # Example Output
//!
//! ```json
//! {"event":"selection_changed","framework":"gin","orm":"sql","endpoint":"/health","url":"http://localhost:8082/health","timestamp":1704700001000}
//! {"event":"test_started","url":"http://localhost:8082/health","framework":"Gin","orm":"database/sql","timestamp":1704700002000}
//! {"event":"test_completed","framework":"Gin","orm":"database/sql","url":"http://localhost:8082/health","duration_ms":1.87,"response":{"status":"ok"},"error":null,"timestamp":1704700002002}
//! ```

pub mod command;
pub mod runner;

use bananas_app::EngineEvent;
use bananas_core::{CatalogEntry, Catalogs, Registry, Selection, TestResult};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::error;

pub use runner::{run_headless, run_once};

/// One entry of a catalog, as listed in `ready` and `catalog` events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    /// Identifier accepted by the matching stdin command
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Identifiers of the current selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionIds {
    pub framework: String,
    pub orm: String,
    pub endpoint: String,
}

impl From<&Selection> for SelectionIds {
    fn from(selection: &Selection) -> Self {
        Self {
            framework: selection.framework.value.to_string(),
            orm: selection.orm.value.to_string(),
            endpoint: selection.endpoint.path.to_string(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine is up; lists what can be selected and what is selected
    Ready {
        host: String,
        frameworks: Vec<CatalogItem>,
        orms: Vec<CatalogItem>,
        endpoints: Vec<CatalogItem>,
        selection: SelectionIds,
        url: String,
        timestamp: i64,
    },

    SelectionChanged {
        #[serde(flatten)]
        selection: SelectionIds,
        url: String,
        timestamp: i64,
    },

    /// A run was accepted; labels are display names
    TestStarted {
        url: String,
        framework: String,
        orm: String,
        timestamp: i64,
    },

    /// A run finished; exactly one of `response` / `error` is set
    TestCompleted {
        framework: String,
        orm: String,
        url: String,
        duration_ms: f64,
        response: Option<Value>,
        error: Option<String>,
        timestamp: i64,
    },

    /// `run` arrived while a test was in flight
    Rejected { reason: String, timestamp: i64 },

    /// Answer to the `status` command
    Status {
        #[serde(flatten)]
        selection: SelectionIds,
        url: String,
        running: bool,
        runs_finished: u64,
        last_duration_ms: Option<f64>,
        last_error: Option<String>,
        timestamp: i64,
    },

    /// Answer to the `list` command
    Catalog {
        frameworks: Vec<CatalogItem>,
        orms: Vec<CatalogItem>,
        endpoints: Vec<CatalogItem>,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(host: &str, catalogs: &Catalogs, selection: &Selection, url: String) -> Self {
        Self::Ready {
            host: host.to_string(),
            frameworks: framework_items(catalogs),
            orms: items(&catalogs.orms),
            endpoints: items(&catalogs.endpoints),
            selection: selection.into(),
            url,
            timestamp: Self::now(),
        }
    }

    pub fn selection_changed(selection: &Selection, url: String) -> Self {
        Self::SelectionChanged {
            selection: selection.into(),
            url,
            timestamp: Self::now(),
        }
    }

    pub fn test_started(selection: &Selection, url: String) -> Self {
        Self::TestStarted {
            url,
            framework: selection.framework.name.to_string(),
            orm: selection.orm.name.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn test_completed(result: &TestResult) -> Self {
        Self::TestCompleted {
            framework: result.framework().to_string(),
            orm: result.orm().to_string(),
            url: result.url().to_string(),
            duration_ms: result.duration_ms(),
            response: result.response().cloned(),
            error: result.error().map(str::to_string),
            timestamp: Self::now(),
        }
    }

    pub fn rejected() -> Self {
        Self::Rejected {
            reason: "a test is already running".to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn status(
        selection: &Selection,
        url: String,
        running: bool,
        runs_finished: u64,
        last: Option<&TestResult>,
    ) -> Self {
        Self::Status {
            selection: selection.into(),
            url,
            running,
            runs_finished,
            last_duration_ms: last.map(TestResult::duration_ms),
            last_error: last.and_then(|r| r.error().map(str::to_string)),
            timestamp: Self::now(),
        }
    }

    pub fn catalog(catalogs: &Catalogs) -> Self {
        Self::Catalog {
            frameworks: framework_items(catalogs),
            orms: items(&catalogs.orms),
            endpoints: items(&catalogs.endpoints),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// NDJSON counterpart of an engine event, if it has one
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::SelectionChanged { selection, url } => {
                Some(Self::selection_changed(selection, url.clone()))
            }
            EngineEvent::RunStarted { selection, url } => {
                Some(Self::test_started(selection, url.clone()))
            }
            EngineEvent::ResultPublished { result } => Some(Self::test_completed(result)),
            EngineEvent::RunRejected => Some(Self::rejected()),
            EngineEvent::RunFinished | EngineEvent::Shutdown => None,
        }
    }
}

fn items<T: CatalogEntry>(registry: &Registry<T>) -> Vec<CatalogItem> {
    registry
        .entries()
        .iter()
        .map(|entry| CatalogItem {
            id: entry.id().to_string(),
            name: entry.label().to_string(),
            port: None,
        })
        .collect()
}

fn framework_items(catalogs: &Catalogs) -> Vec<CatalogItem> {
    catalogs
        .frameworks
        .entries()
        .iter()
        .map(|f| CatalogItem {
            id: f.value.to_string(),
            name: f.name.to_string(),
            port: Some(f.port),
        })
        .collect()
}
