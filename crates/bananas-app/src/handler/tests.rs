//! Tests for handler module

use super::*;
use crate::cells::StateCells;
use crate::input_key::InputKey;
use crate::state::{AppPhase, AppState, Focus};
use bananas_core::{catalogs, ProbeRequest, TestResult};
use serde_json::json;
use std::time::Duration;

fn test_state() -> AppState {
    let cells = StateCells::signals(catalogs().default_selection());
    AppState::new(
        cells.selection_state(catalogs()),
        cells.result_state(),
        "localhost",
    )
}

/// Run `update` and follow any chained messages, collecting actions
fn update_all(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn publish(state: &AppState, body: serde_json::Value) {
    let request = ProbeRequest::from_selection("localhost", &state.selection.current());
    state
        .results
        .publish(TestResult::success(&request, body, Duration::from_millis(1)));
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_keys() {
    let state = test_state();
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        assert_eq!(handle_key(&state, key), Some(Message::Quit));
    }
}

#[test]
fn test_r_runs_from_any_focus() {
    let mut state = test_state();
    for focus in [Focus::Framework, Focus::Orm, Focus::Endpoint, Focus::RunButton] {
        state.focus = focus;
        assert_eq!(handle_key(&state, InputKey::Char('r')), Some(Message::RunTest));
    }
}

#[test]
fn test_enter_depends_on_focus() {
    let mut state = test_state();
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::FocusNext));

    state.focus = Focus::RunButton;
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::RunTest));
}

#[test]
fn test_navigation_keys_on_selector() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::SelectNext));
    assert_eq!(handle_key(&state, InputKey::Char('j')), Some(Message::SelectNext));
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::SelectPrevious));
    assert_eq!(handle_key(&state, InputKey::Char('k')), Some(Message::SelectPrevious));
    assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::FocusNext));
    assert_eq!(handle_key(&state, InputKey::BackTab), Some(Message::FocusPrevious));
    assert_eq!(handle_key(&state, InputKey::Char('x')), None);
}

// ─────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_down_on_framework_selects_next_framework() {
    let mut state = test_state();
    update_all(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.selection.current().framework.value, "gin");
}

#[test]
fn test_step_emits_select_message_with_identifier() {
    let mut state = test_state();
    state.focus = Focus::Endpoint;

    let result = update(&mut state, Message::SelectNext);
    assert_eq!(
        result.message,
        Some(Message::SelectEndpoint("/api/test/simple".to_string()))
    );
}

#[test]
fn test_step_is_clamped() {
    let mut state = test_state();
    state.focus = Focus::Orm;

    update_all(&mut state, Message::SelectPrevious);
    assert_eq!(state.selection.current().orm.value, "sql");

    update_all(&mut state, Message::SelectLast);
    assert_eq!(state.selection.current().orm.value, "pgx");

    update_all(&mut state, Message::SelectNext);
    assert_eq!(state.selection.current().orm.value, "pgx");

    update_all(&mut state, Message::SelectFirst);
    assert_eq!(state.selection.current().orm.value, "sql");
}

#[test]
fn test_step_on_run_button_is_noop() {
    let mut state = test_state();
    state.focus = Focus::RunButton;
    let result = update(&mut state, Message::SelectNext);
    assert!(result.message.is_none());
    assert!(result.action.is_none());
}

#[test]
fn test_unknown_identifier_leaves_selection() {
    let mut state = test_state();
    let before = state.selection.current();
    update_all(&mut state, Message::SelectFramework("django".into()));
    update_all(&mut state, Message::SelectOrm("".into()));
    update_all(&mut state, Message::SelectEndpoint("/api".into()));
    assert_eq!(state.selection.current(), before);
}

// ─────────────────────────────────────────────────────────
// Runs
// ─────────────────────────────────────────────────────────

#[test]
fn test_run_test_marks_in_flight_and_returns_action() {
    let mut state = test_state();
    state.selection.set_framework("gin");
    publish(&state, json!({"old": true}));

    let result = update(&mut state, Message::RunTest);

    let selection = state.selection.current();
    assert_eq!(result.action, Some(UpdateAction::RunTest { selection }));
    assert!(state.results.is_in_flight());
    assert!(state.results.current().is_none());
    assert_eq!(state.runs_started, 1);
    assert_eq!(
        state.last_request.as_ref().map(|r| r.url.as_str()),
        Some("http://localhost:8082/health")
    );
}

#[test]
fn test_run_test_rejected_while_in_flight() {
    let mut state = test_state();
    assert_eq!(update_all(&mut state, Message::RunTest).len(), 1);

    let result = update(&mut state, Message::RunTest);
    assert!(result.action.is_none());
    assert!(result.message.is_none());
    assert_eq!(state.runs_started, 1);
    assert_eq!(state.runs_rejected, 1);
    assert!(state.results.is_in_flight());
}

#[test]
fn test_run_allowed_again_after_finish() {
    let mut state = test_state();
    update_all(&mut state, Message::RunTest);
    publish(&state, json!(1));
    state.results.finish();
    let result = state.results.current().unwrap();
    update_all(
        &mut state,
        Message::TestFinished {
            result: Box::new(result.clone()),
        },
    );
    assert_eq!(state.last_finished, Some(result));

    assert_eq!(update_all(&mut state, Message::RunTest).len(), 1);
    assert_eq!(state.runs_started, 2);
    assert_eq!(state.runs_finished, 1);
}

#[test]
fn test_tick_advances_spinner_only_in_flight() {
    let mut state = test_state();
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);

    update(&mut state, Message::RunTest);
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 2);
}

// ─────────────────────────────────────────────────────────
// Focus, scroll, quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_focus_messages() {
    let mut state = test_state();
    update(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::Orm);
    update(&mut state, Message::FocusPrevious);
    update(&mut state, Message::FocusPrevious);
    assert_eq!(state.focus, Focus::RunButton);
}

#[test]
fn test_page_down_clamped_to_response_length() {
    let mut state = test_state();
    update(&mut state, Message::PageDown);
    assert_eq!(state.response_scroll, 0);

    let items: Vec<i32> = (0..30).collect();
    publish(&state, json!(items));
    let lines = state.response_line_count();
    assert_eq!(lines, 32);

    for _ in 0..10 {
        update(&mut state, Message::PageDown);
    }
    assert_eq!(state.response_scroll, 31);

    update(&mut state, Message::PageUp);
    assert_eq!(state.response_scroll, 21);
}

#[test]
fn test_quit_sets_phase() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}
