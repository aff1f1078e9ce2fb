//! Message processing: TEA update loop plus action dispatch

use tokio::sync::mpsc;

use crate::actions::{handle_action, RunTaskList};
use crate::handler;
use crate::message::Message;
use crate::probe::ProbeClient;
use crate::runner::TestRunner;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are handled in the same call; actions are dispatched
/// as they are produced.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    runner: &TestRunner<C>,
    run_tasks: &RunTaskList,
) where
    C: ProbeClient + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), runner, &state.results, run_tasks);
        }

        msg = result.message;
    }
}
