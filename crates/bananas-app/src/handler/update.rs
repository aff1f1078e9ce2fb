//! Main update function - handles state transitions (TEA pattern)

use bananas_core::ProbeRequest;
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines moved by PageUp / PageDown in the response view
pub const RESPONSE_PAGE: u16 = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.results.is_in_flight() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectFramework(value) => {
            state.selection.set_framework(&value);
            UpdateResult::none()
        }
        Message::SelectOrm(value) => {
            state.selection.set_orm(&value);
            UpdateResult::none()
        }
        Message::SelectEndpoint(path) => {
            state.selection.set_endpoint(&path);
            UpdateResult::none()
        }
        Message::SelectPrevious => step_selection(state, -1),
        Message::SelectNext => step_selection(state, 1),
        Message::SelectFirst => step_selection(state, -(selector_len(state) as isize)),
        Message::SelectLast => step_selection(state, selector_len(state) as isize),

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Results Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::PageUp => {
            state.response_scroll = state.response_scroll.saturating_sub(RESPONSE_PAGE);
            UpdateResult::none()
        }
        Message::PageDown => {
            let max = state.response_line_count().saturating_sub(1);
            let max = u16::try_from(max).unwrap_or(u16::MAX);
            state.response_scroll = state.response_scroll.saturating_add(RESPONSE_PAGE).min(max);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Test Run Messages
        // ─────────────────────────────────────────────────────────
        Message::RunTest => handle_run_test(state),

        Message::TestFinished { result } => {
            state.runs_finished += 1;
            state.response_scroll = 0;
            state.last_finished = Some(*result);
            debug!(
                "Run finished ({} started, {} finished)",
                state.runs_started, state.runs_finished
            );
            UpdateResult::none()
        }
    }
}

/// Trigger boundary for runs: at most one in flight
fn handle_run_test(state: &mut AppState) -> UpdateResult {
    if state.results.is_in_flight() {
        warn!("Test already running, ignoring run request");
        state.runs_rejected += 1;
        return UpdateResult::none();
    }

    let selection = state.selection.current();

    // Mark in flight here, not in the spawned task, so a second RunTest
    // drained in the same batch is rejected
    state.results.begin();
    state.last_request = Some(ProbeRequest::from_selection(&state.host, &selection));
    state.response_scroll = 0;
    state.runs_started += 1;

    UpdateResult::action(UpdateAction::RunTest { selection })
}

fn selector_len(state: &AppState) -> usize {
    let catalogs = state.selection.catalogs();
    match state.focus {
        Focus::Framework => catalogs.frameworks.len(),
        Focus::Orm => catalogs.orms.len(),
        Focus::Endpoint => catalogs.endpoints.len(),
        Focus::RunButton => 0,
    }
}

/// Turn a cursor move on the focused selector into a `Select*` message
fn step_selection(state: &AppState, offset: isize) -> UpdateResult {
    let catalogs = state.selection.catalogs();
    let current = state.selection.current();

    let msg = match state.focus {
        Focus::Framework => Message::SelectFramework(
            catalogs
                .frameworks
                .neighbor(current.framework.value, offset)
                .value
                .to_string(),
        ),
        Focus::Orm => {
            Message::SelectOrm(catalogs.orms.neighbor(current.orm.value, offset).value.to_string())
        }
        Focus::Endpoint => Message::SelectEndpoint(
            catalogs
                .endpoints
                .neighbor(current.endpoint.path, offset)
                .path
                .to_string(),
        ),
        Focus::RunButton => return UpdateResult::none(),
    };

    UpdateResult::message(msg)
}
