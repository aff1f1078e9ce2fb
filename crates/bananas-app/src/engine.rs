//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the test runner and
//! the handles of spawned run tasks. Both presentations drive it the same
//! way: feed messages in, subscribe to [`EngineEvent`]s, call `shutdown()`.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use bananas_core::{build_url, catalogs, Selection};

use crate::actions::RunTaskList;
use crate::cells::StateCells;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::probe::{HttpProbeClient, ProbeClient};
use crate::process;
use crate::runner::TestRunner;
use crate::signals;
use crate::state::{AppPhase, AppState};

/// How long shutdown waits for each outstanding run
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    phase: AppPhase,
    selection: Selection,
    runs_started: u64,
    runs_finished: u64,
    runs_rejected: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            selection: state.selection.current(),
            runs_started: state.runs_started,
            runs_finished: state.runs_finished,
            runs_rejected: state.runs_rejected,
        }
    }
}

/// Orchestration engine for the framework tester.
pub struct Engine<C = HttpProbeClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings, after command-line overrides
    pub settings: Settings,

    runner: TestRunner<C>,

    run_tasks: RunTaskList,

    cells: StateCells,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<HttpProbeClient> {
    /// Create an engine probing over HTTP and listening for OS signals.
    ///
    /// `make_cells` picks the observable primitive for this presentation;
    /// it receives the initial selection resolved from `settings`.
    pub fn new(settings: Settings, make_cells: impl FnOnce(Selection) -> StateCells) -> Self {
        let engine = Self::with_client(settings, make_cells, HttpProbeClient::new());
        signals::spawn_signal_handler(engine.msg_tx.clone());
        engine
    }
}

impl<C> Engine<C>
where
    C: ProbeClient + Sync + 'static,
{
    /// Create an engine with a custom probe client. No signal handler.
    pub fn with_client(
        settings: Settings,
        make_cells: impl FnOnce(Selection) -> StateCells,
        client: C,
    ) -> Self {
        let catalogs = catalogs();
        let cells = make_cells(settings.initial_selection(catalogs));

        let host = settings.target.host.clone();
        let state = AppState::new(
            cells.selection_state(catalogs),
            cells.result_state(),
            host.clone(),
        );
        let runner = TestRunner::new(client, host);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        info!(
            "Engine ready: host={}, selection={} / {} / {}",
            settings.target.host,
            state.selection.current().framework.value,
            state.selection.current().orm.value,
            state.selection.current().endpoint.path
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            runner,
            run_tasks: Arc::new(Mutex::new(Vec::new())),
            cells,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.runner,
            &self.run_tasks,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// The observable cells backing selection and result state
    pub fn cells(&self) -> &StateCells {
        &self.cells
    }

    pub fn runner(&self) -> &TestRunner<C> {
        &self.runner
    }

    /// Number of run tasks not yet finished
    pub fn pending_runs(&self) -> usize {
        self.run_tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|h| !h.is_finished())
            .count()
    }

    /// Initiate shutdown: wait (bounded) for outstanding runs.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let tasks: Vec<_> = {
            let mut list = self.run_tasks.lock().unwrap_or_else(PoisonError::into_inner);
            list.drain(..).collect()
        };

        for handle in tasks {
            match tokio::time::timeout(SHUTDOWN_TIMEOUT, handle).await {
                Ok(Ok(())) => debug!("Run task finished"),
                Ok(Err(e)) => warn!("Run task panicked: {}", e),
                Err(_) => warn!("Run task did not finish within {:?}", SHUTDOWN_TIMEOUT),
            }
        }

        info!("Engine shut down");
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.selection != post.selection {
            self.emit(EngineEvent::SelectionChanged {
                selection: post.selection,
                url: build_url(&self.state.host, &post.selection),
            });
        }

        if post.runs_rejected > pre.runs_rejected {
            self.emit(EngineEvent::RunRejected);
        }

        if post.runs_started > pre.runs_started {
            let url = self
                .state
                .last_request
                .as_ref()
                .map(|r| r.url.clone())
                .unwrap_or_else(|| build_url(&self.state.host, &post.selection));
            self.emit(EngineEvent::RunStarted {
                selection: post.selection,
                url,
            });
        }

        if post.runs_finished > pre.runs_finished {
            if let Some(result) = &self.state.last_finished {
                self.emit(EngineEvent::ResultPublished {
                    result: result.clone(),
                });
            }
            self.emit(EngineEvent::RunFinished);
        }

        if pre.phase != post.phase {
            debug!("Phase changed: {:?} -> {:?}", pre.phase, post.phase);
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers; that is fine.
    fn emit(&self, event: EngineEvent) {
        debug!("EngineEvent: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
