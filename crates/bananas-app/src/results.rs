//! Result state: latest TestResult plus the in-flight flag
//!
//! Presentations only read this. The run trigger marks a run as started;
//! everything after that is written by the runner.

use std::fmt;
use std::sync::Arc;

use bananas_core::TestResult;

use crate::observable::ObservableState;

#[derive(Clone)]
pub struct ResultState {
    current: Arc<dyn ObservableState<Option<TestResult>>>,
    in_flight: Arc<dyn ObservableState<bool>>,
}

impl ResultState {
    pub fn new(
        current: Arc<dyn ObservableState<Option<TestResult>>>,
        in_flight: Arc<dyn ObservableState<bool>>,
    ) -> Self {
        Self { current, in_flight }
    }

    /// Mark a run as started and clear the previous result
    pub fn begin(&self) {
        self.in_flight.set(true);
        self.current.set(None);
    }

    /// Store the outcome of the run in progress
    pub fn publish(&self, result: TestResult) {
        self.current.set(Some(result));
    }

    /// Clear the in-flight flag
    pub fn finish(&self) {
        self.in_flight.set(false);
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub fn current(&self) -> Option<TestResult> {
        self.current.get()
    }

    pub fn result_cell(&self) -> &Arc<dyn ObservableState<Option<TestResult>>> {
        &self.current
    }

    pub fn in_flight_cell(&self) -> &Arc<dyn ObservableState<bool>> {
        &self.in_flight
    }
}

impl fmt::Debug for ResultState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultState")
            .field("in_flight", &self.is_in_flight())
            .field("current", &self.current())
            .finish()
    }
}

/// Clears the in-flight flag when dropped
///
/// Created before the probe starts, so the flag is released on every exit
/// path, including a panic in the probe client.
#[must_use = "the in-flight flag clears as soon as the guard is dropped"]
pub struct InFlightGuard {
    state: ResultState,
}

impl InFlightGuard {
    pub fn new(state: ResultState) -> Self {
        Self { state }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.state.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observable::SignalState;
    use bananas_core::ProbeRequest;
    use std::sync::Mutex;
    use std::time::Duration;

    fn state() -> ResultState {
        ResultState::new(
            Arc::new(SignalState::new(None)),
            Arc::new(SignalState::new(false)),
        )
    }

    fn result(message: &str) -> TestResult {
        let request = ProbeRequest {
            url: "http://localhost:8081/health".into(),
            framework_label: "Standard Library".into(),
            orm_label: "database/sql".into(),
        };
        TestResult::failure(&request, Some(message), Duration::ZERO)
    }

    #[test]
    fn test_initially_idle_and_empty() {
        let state = state();
        assert!(!state.is_in_flight());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let state = state();
        state.publish(result("first"));
        assert!(state.current().is_some());

        state.begin();
        assert!(state.is_in_flight());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_guard_clears_flag_on_drop() {
        let state = state();
        state.begin();
        {
            let _guard = InFlightGuard::new(state.clone());
            state.publish(result("boom"));
            assert!(state.is_in_flight());
        }
        assert!(!state.is_in_flight());
        assert_eq!(state.current().unwrap().error(), Some("boom"));
    }

    #[test]
    fn test_flag_clears_after_publish() {
        let state = state();
        let order = Arc::new(Mutex::new(Vec::new()));

        let o = Arc::clone(&order);
        state
            .result_cell()
            .subscribe(Box::new(move |r: &Option<TestResult>| {
                if r.is_some() {
                    o.lock().unwrap().push("published");
                }
            }));
        let o = Arc::clone(&order);
        state.in_flight_cell().subscribe(Box::new(move |flag: &bool| {
            if !*flag {
                o.lock().unwrap().push("cleared");
            }
        }));

        state.begin();
        let guard = InFlightGuard::new(state.clone());
        state.publish(result("x"));
        drop(guard);

        assert_eq!(*order.lock().unwrap(), vec!["published", "cleared"]);
    }

    #[test]
    fn test_guard_clears_flag_on_panic() {
        let state = state();
        state.begin();

        let inner = state.clone();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = InFlightGuard::new(inner);
            panic!("probe exploded");
        }));

        assert!(outcome.is_err());
        assert!(!state.is_in_flight());
    }
}
