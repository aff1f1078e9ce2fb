//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;
use tracing::debug;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::probe::ProbeClient;
use crate::results::ResultState;
use crate::runner::TestRunner;

/// Handles of spawned run tasks, awaited on shutdown
pub type RunTaskList = Arc<Mutex<Vec<tokio::task::JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    runner: &TestRunner<C>,
    results: &ResultState,
    run_tasks: &RunTaskList,
) where
    C: ProbeClient + Sync + 'static,
{
    match action {
        UpdateAction::RunTest { selection } => {
            let runner = runner.clone();
            let results = results.clone();

            let handle = tokio::spawn(async move {
                let result = runner.execute(selection, &results).await;
                let msg = Message::TestFinished {
                    result: Box::new(result),
                };
                if msg_tx.send(msg).await.is_err() {
                    debug!("Message channel closed before run completion was reported");
                }
            });

            let mut tasks = run_tasks.lock().unwrap_or_else(PoisonError::into_inner);
            tasks.retain(|h| !h.is_finished());
            tasks.push(handle);
        }
    }
}
