//! Headless mode runner - main event loop without TUI
//!
//! Drives the same Engine as the TUI, on watch cells, with stdin commands
//! as input and NDJSON events as output.

use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use bananas_app::config::Settings;
use bananas_app::message::Message;
use bananas_app::{Engine, EngineEvent, ProbeClient, StateCells};
use bananas_core::prelude::*;
use bananas_core::{catalogs, TestResult};

use super::command::{read_commands_blocking, Command};
use super::HeadlessEvent;

/// Run in headless mode until `quit`, end of input, or a signal
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("Bananas tester starting in HEADLESS mode");

    let mut engine = Engine::new(settings, StateCells::watched);
    let mut events = engine.subscribe();

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(64);
    std::thread::spawn(move || read_commands_blocking(cmd_tx));

    emit_ready(&engine);

    let result = headless_event_loop(&mut engine, &mut events, cmd_rx).await;

    // Runs still in flight get their test_completed before we exit
    engine.shutdown().await;
    engine.drain_pending_messages();
    forward_events(&mut events);

    info!("Bananas tester headless mode exiting");
    result
}

/// Run one test with the configured selection and print its result.
///
/// Returns whether the run succeeded.
pub async fn run_once(settings: Settings) -> Result<bool> {
    let mut engine = Engine::new(settings, StateCells::watched);
    let result = run_single(&mut engine).await;
    engine.shutdown().await;

    match result {
        Some(result) => {
            HeadlessEvent::test_completed(&result).emit();
            Ok(result.is_success())
        }
        None => {
            HeadlessEvent::error("interrupted before the test finished", true).emit();
            Ok(false)
        }
    }
}

/// Trigger a run and wait for its result. `None` if the engine quit first.
async fn run_single<C>(engine: &mut Engine<C>) -> Option<TestResult>
where
    C: ProbeClient + Sync + 'static,
{
    let mut events = engine.subscribe();
    engine.process_message(Message::RunTest);

    while !engine.should_quit() {
        if !engine.process_next().await {
            break;
        }
        loop {
            match events.try_recv() {
                Ok(EngineEvent::ResultPublished { result }) => return Some(result),
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    warn!("Engine event receiver lagged by {} events", n);
                }
                Err(_) => break,
            }
        }
    }
    None
}

fn emit_ready<C>(engine: &Engine<C>)
where
    C: ProbeClient + Sync + 'static,
{
    let state = &engine.state;
    HeadlessEvent::ready(
        &state.host,
        catalogs(),
        &state.selection.current(),
        state.next_url(),
    )
    .emit();
}

/// Main headless event loop
async fn headless_event_loop<C>(
    engine: &mut Engine<C>,
    events: &mut broadcast::Receiver<EngineEvent>,
    mut cmd_rx: mpsc::Receiver<Command>,
) -> Result<()>
where
    C: ProbeClient + Sync + 'static,
{
    let mut stdin_open = true;

    while !engine.should_quit() {
        tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => engine.process_message(msg),
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            cmd = cmd_rx.recv(), if stdin_open => match cmd {
                Some(cmd) => handle_command(engine, cmd),
                None => {
                    info!("Stdin closed, quitting");
                    stdin_open = false;
                    engine.process_message(Message::Quit);
                }
            },
        }

        forward_events(events);
    }

    Ok(())
}

/// Apply one stdin command
fn handle_command<C>(engine: &mut Engine<C>, command: Command)
where
    C: ProbeClient + Sync + 'static,
{
    if let Some(reason) = unknown_identifier(&command) {
        warn!("{}", reason);
        HeadlessEvent::error(reason, false).emit();
        return;
    }

    if let Some(message) = command.to_message() {
        engine.process_message(message);
        return;
    }

    let state = &engine.state;
    match command {
        Command::Status => HeadlessEvent::status(
            &state.selection.current(),
            state.next_url(),
            state.is_running_test(),
            state.runs_finished,
            state.current_result().as_ref(),
        )
        .emit(),
        Command::List => HeadlessEvent::catalog(catalogs()).emit(),
        Command::Invalid(reason) => HeadlessEvent::error(reason, false).emit(),
        _ => {}
    }
}

/// Reason to report when a selection command names nothing in its catalog.
///
/// The selection itself ignores such identifiers; this only tells the
/// operator why nothing changed.
fn unknown_identifier(command: &Command) -> Option<String> {
    let catalogs = catalogs();
    match command {
        Command::Framework(v) if catalogs.frameworks.lookup(v).is_none() => {
            Some(format!("unknown framework: {}", v))
        }
        Command::Orm(v) if catalogs.orms.lookup(v).is_none() => Some(format!("unknown orm: {}", v)),
        Command::Endpoint(v) if catalogs.endpoints.lookup(v).is_none() => {
            Some(format!("unknown endpoint: {}", v))
        }
        _ => None,
    }
}

/// Print every pending engine event that has an NDJSON form
fn forward_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(out) = HeadlessEvent::from_engine_event(&event) {
                    out.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Engine event receiver lagged by {} events", n);
            }
            Err(_) => break,
        }
    }
}
