//! Test runner: turns a selection into one probe and publishes its outcome
//!
//! A run never fails from the caller's point of view. Whatever happens on the
//! wire ends up as a [`TestResult`] in the [`ResultState`].

use std::sync::Arc;
use std::time::Instant;

use bananas_core::prelude::*;
use bananas_core::{ProbeRequest, Selection, TestResult};

use crate::probe::{HttpProbeClient, ProbeClient};
use crate::results::{InFlightGuard, ResultState};
use crate::selection::SelectionState;

pub struct TestRunner<C = HttpProbeClient> {
    client: Arc<C>,
    host: String,
}

impl<C> Clone for TestRunner<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            host: self.host.clone(),
        }
    }
}

impl<C: ProbeClient + Sync> TestRunner<C> {
    pub fn new(client: C, host: impl Into<String>) -> Self {
        Self {
            client: Arc::new(client),
            host: host.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Run one test against the current selection
    ///
    /// Marks the result state in flight, probes, publishes, clears the flag.
    pub async fn run_test(&self, selection: &SelectionState, results: &ResultState) {
        results.begin();
        self.execute(selection.current(), results).await;
    }

    /// Second half of a run whose start was already recorded with
    /// [`ResultState::begin`], handing back the published result
    ///
    /// `selection` is the snapshot taken at start; later selection changes
    /// do not affect this run.
    pub async fn execute(&self, selection: Selection, results: &ResultState) -> TestResult {
        let _guard = InFlightGuard::new(results.clone());

        let start = Instant::now();
        let request = ProbeRequest::from_selection(&self.host, &selection);
        info!("Running test: GET {}", request.url);

        let result = match self.client.fetch(&request.url).await {
            Ok(response) => TestResult::success(&request, response, start.elapsed()),
            Err(e) => {
                warn!("Test against {} failed: {}", request.url, e);
                TestResult::failure(&request, e.message(), start.elapsed())
            }
        };

        debug!(
            "Test finished in {} ({})",
            result.formatted_duration(),
            if result.is_success() { "ok" } else { "error" }
        );
        results.publish(result.clone());
        result
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedClient;
    use super::*;
    use crate::cells::StateCells;
    use crate::probe::ProbeError;
    use bananas_core::{catalogs, DEFAULT_HOST};
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;

    fn states() -> (SelectionState, ResultState) {
        let cells = StateCells::signals(catalogs().default_selection());
        (cells.selection_state(catalogs()), cells.result_state())
    }

    #[tokio::test]
    async fn test_success_publishes_response() {
        let (selection, results) = states();
        selection.set_framework("gin");
        selection.set_endpoint("/api/test/simple");

        let runner = TestRunner::new(
            ScriptedClient::new(vec![Ok(json!({"message": "hello"}))]),
            DEFAULT_HOST,
        );
        runner.run_test(&selection, &results).await;

        let result = results.current().unwrap();
        assert!(result.is_success());
        assert_eq!(result.framework(), "Gin");
        assert_eq!(result.orm(), "database/sql");
        assert_eq!(result.url(), "http://localhost:8082/api/test/simple");
        assert_eq!(result.response(), Some(&json!({"message": "hello"})));
        assert!(result.duration_ms() >= 0.0);
        assert!(!results.is_in_flight());
    }

    #[tokio::test]
    async fn test_database_probe_url() {
        let (selection, results) = states();
        selection.set_framework("standard");
        selection.set_orm("gorm");
        selection.set_endpoint("/api/test/database?limit=10");

        let client = ScriptedClient::new(vec![Ok(json!([]))]);
        let runner = TestRunner::new(client, DEFAULT_HOST);
        runner.run_test(&selection, &results).await;

        assert_eq!(
            runner.client.requested(),
            vec!["http://localhost:8081/api/test/database?limit=10&orm=gorm"]
        );
    }

    #[tokio::test]
    async fn test_failure_publishes_error() {
        let (selection, results) = states();
        let runner = TestRunner::new(
            ScriptedClient::new(vec![Err(ProbeError::Transport("connection refused".into()))]),
            DEFAULT_HOST,
        );
        runner.run_test(&selection, &results).await;

        let result = results.current().unwrap();
        assert_eq!(result.error(), Some("connection refused"));
        assert!(result.response().is_none());
        assert!(!results.is_in_flight());
    }

    #[tokio::test]
    async fn test_failure_without_message_is_unknown_error() {
        let (selection, results) = states();
        let runner = TestRunner::new(ScriptedClient::new(vec![Err(ProbeError::Unknown)]), "h");
        runner.run_test(&selection, &results).await;

        assert_eq!(results.current().unwrap().error(), Some("Unknown error"));
    }

    #[tokio::test]
    async fn test_in_flight_during_probe() {
        let (selection, results) = states();
        let runner = TestRunner::new(
            ScriptedClient::new(vec![Ok(json!(1))]).with_delay(Duration::from_millis(50)),
            DEFAULT_HOST,
        );

        let task = {
            let runner = runner.clone();
            let selection = selection.clone();
            let results = results.clone();
            tokio::spawn(async move { runner.run_test(&selection, &results).await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(results.is_in_flight());
        assert!(results.current().is_none());

        task.await.unwrap();
        assert!(!results.is_in_flight());
        assert!(results.current().is_some());
    }

    #[tokio::test]
    async fn test_selection_change_mid_flight_does_not_affect_run() {
        let (selection, results) = states();
        selection.set_framework("echo");
        let runner = TestRunner::new(
            ScriptedClient::new(vec![Ok(json!({}))]).with_delay(Duration::from_millis(30)),
            DEFAULT_HOST,
        );

        let task = {
            let runner = runner.clone();
            let selection = selection.clone();
            let results = results.clone();
            tokio::spawn(async move { runner.run_test(&selection, &results).await })
        };

        tokio::time::sleep(Duration::from_millis(5)).await;
        selection.set_framework("chi");
        task.await.unwrap();

        let result = results.current().unwrap();
        assert_eq!(result.framework(), "Echo");
        assert_eq!(result.url(), "http://localhost:8084/health");
    }

    #[tokio::test]
    async fn test_new_run_clears_previous_result_first() {
        let (selection, results) = states();
        let runner = TestRunner::new(
            ScriptedClient::new(vec![Err(ProbeError::Transport("down".into())), Ok(json!(2))]),
            DEFAULT_HOST,
        );
        runner.run_test(&selection, &results).await;
        assert!(results.current().is_some());

        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
        let s = std::sync::Arc::clone(&seen);
        results
            .result_cell()
            .subscribe(Box::new(move |r: &Option<TestResult>| {
                s.lock().unwrap().push(r.is_some());
            }));

        runner.run_test(&selection, &results).await;
        assert_eq!(*seen.lock().unwrap(), vec![false, true]);
        assert!(results.current().unwrap().is_success());
    }

    #[tokio::test]
    async fn test_custom_host() {
        let (selection, results) = states();
        let runner = TestRunner::new(ScriptedClient::new(vec![Ok(json!(null))]), "10.1.2.3");
        runner.run_test(&selection, &results).await;
        assert_eq!(runner.host(), "10.1.2.3");
        assert_eq!(
            results.current().unwrap().url(),
            "http://10.1.2.3:8081/health"
        );
    }

    #[tokio::test]
    async fn test_duration_covers_probe_delay() {
        let (selection, results) = states();
        let runner = TestRunner::new(
            ScriptedClient::new(vec![Ok(json!({}))]).with_delay(Duration::from_millis(60)),
            DEFAULT_HOST,
        );
        runner.run_test(&selection, &results).await;

        let result = results.current().unwrap();
        assert!(result.duration_ms() >= 60.0, "got {}", result.duration_ms());
        assert!(result.duration_ms() < 10_000.0);
    }

    #[tokio::test]
    async fn test_failure_duration_covers_probe_delay() {
        let (selection, results) = states();
        let runner = TestRunner::new(
            ScriptedClient::new(vec![Err(ProbeError::Transport("timed out".into()))])
                .with_delay(Duration::from_millis(60)),
            DEFAULT_HOST,
        );
        runner.run_test(&selection, &results).await;

        let result = results.current().unwrap();
        assert_eq!(result.error(), Some("timed out"));
        assert!(result.duration_ms() >= 60.0, "got {}", result.duration_ms());
    }
}
