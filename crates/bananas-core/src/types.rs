//! Core domain types for the framework tester

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::ProbeRequest;

/// Error text used when a failed run carries no message of its own
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A backend implementation under test, reachable on a fixed local port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Framework {
    /// Display name ("Gin", "Gorilla Mux", ...)
    pub name: &'static str,
    /// Stable identifier, used for lookups
    pub value: &'static str,
    /// Port the framework's server listens on
    pub port: u16,
}

/// A data-access strategy, only meaningful to the database probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Orm {
    pub name: &'static str,
    pub value: &'static str,
}

/// An HTTP probe path exposed identically by every framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    pub name: &'static str,
    /// Path template, may already contain a query string
    pub path: &'static str,
}

impl Endpoint {
    /// Whether this is the database probe, which takes an `orm` parameter
    pub fn requires_orm(&self) -> bool {
        self.path.contains("database")
    }
}

/// The operator's current choice, always fully populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub framework: &'static Framework,
    pub orm: &'static Orm,
    pub endpoint: &'static Endpoint,
}

impl Selection {
    pub fn new(
        framework: &'static Framework,
        orm: &'static Orm,
        endpoint: &'static Endpoint,
    ) -> Self {
        Self {
            framework,
            orm,
            endpoint,
        }
    }

    pub fn with_framework(self, framework: &'static Framework) -> Self {
        Self { framework, ..self }
    }

    pub fn with_orm(self, orm: &'static Orm) -> Self {
        Self { orm, ..self }
    }

    pub fn with_endpoint(self, endpoint: &'static Endpoint) -> Self {
        Self { endpoint, ..self }
    }
}

/// Outcome of a single test run
///
/// Built once by the runner and never modified afterwards; a new run
/// always produces a new value. Exactly one of `response` / `error` is
/// meaningful: `error` is `None` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    framework: String,
    orm: String,
    url: String,
    response: Option<Value>,
    duration_ms: f64,
    error: Option<String>,
    completed_at: DateTime<Utc>,
}

impl TestResult {
    /// Successful run with a decoded payload
    pub fn success(request: &ProbeRequest, response: Value, elapsed: Duration) -> Self {
        Self {
            framework: request.framework_label.clone(),
            orm: request.orm_label.clone(),
            url: request.url.clone(),
            response: Some(response),
            duration_ms: to_millis(elapsed),
            error: None,
            completed_at: Utc::now(),
        }
    }

    /// Failed run. A missing or blank message becomes [`UNKNOWN_ERROR`].
    pub fn failure(request: &ProbeRequest, message: Option<&str>, elapsed: Duration) -> Self {
        let error = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();

        Self {
            framework: request.framework_label.clone(),
            orm: request.orm_label.clone(),
            url: request.url.clone(),
            response: None,
            duration_ms: to_millis(elapsed),
            error: Some(error),
            completed_at: Utc::now(),
        }
    }

    /// Framework display name captured when the run started
    pub fn framework(&self) -> &str {
        &self.framework
    }

    /// ORM display name captured when the run started
    pub fn orm(&self) -> &str {
        &self.orm
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// Elapsed wall-clock time in milliseconds, never negative
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Duration as shown to the operator, e.g. `"12.34ms"`
    pub fn formatted_duration(&self) -> String {
        format!("{:.2}ms", self.duration_ms)
    }

    /// Pretty-printed payload (2-space indent), `None` on failure
    pub fn formatted_response(&self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        self.response
            .as_ref()
            .map(|value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
    }
}

fn to_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
