//! Application state (Model in TEA pattern)

use bananas_core::{build_url, ProbeRequest, TestResult};

use crate::results::ResultState;
use crate::selection::SelectionState;

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which control receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Framework,
    Orm,
    Endpoint,
    RunButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Framework => Focus::Orm,
            Focus::Orm => Focus::Endpoint,
            Focus::Endpoint => Focus::RunButton,
            Focus::RunButton => Focus::Framework,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Framework => Focus::RunButton,
            Focus::Orm => Focus::Framework,
            Focus::Endpoint => Focus::Orm,
            Focus::RunButton => Focus::Endpoint,
        }
    }

    /// Whether this is one of the three selector panels
    pub fn is_selector(self) -> bool {
        !matches!(self, Focus::RunButton)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub focus: Focus,

    /// Selection driving the next run
    pub selection: SelectionState,

    /// Latest result and in-flight flag, shared with run tasks
    pub results: ResultState,

    /// Host the frameworks are reached on
    pub host: String,

    /// Request of the most recently started run
    pub last_request: Option<ProbeRequest>,

    /// Result of the most recently finished run, as reported by its task
    pub last_finished: Option<TestResult>,

    /// First visible line of the response body
    pub response_scroll: u16,

    /// Animation frame for the in-flight indicator
    pub spinner_frame: usize,

    pub runs_started: u64,
    pub runs_finished: u64,
    pub runs_rejected: u64,
}

impl AppState {
    pub fn new(selection: SelectionState, results: ResultState, host: impl Into<String>) -> Self {
        Self {
            phase: AppPhase::Running,
            focus: Focus::default(),
            selection,
            results,
            host: host.into(),
            last_request: None,
            last_finished: None,
            response_scroll: 0,
            spinner_frame: 0,
            runs_started: 0,
            runs_finished: 0,
            runs_rejected: 0,
        }
    }

    /// URL the next run will hit
    pub fn next_url(&self) -> String {
        build_url(&self.host, &self.selection.current())
    }

    pub fn is_running_test(&self) -> bool {
        self.results.is_in_flight()
    }

    pub fn current_result(&self) -> Option<TestResult> {
        self.results.current()
    }

    /// Number of lines in the pretty-printed response, 0 when there is none
    pub fn response_line_count(&self) -> usize {
        self.results
            .current()
            .and_then(|r| r.formatted_response())
            .map(|body| body.lines().count())
            .unwrap_or(0)
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
