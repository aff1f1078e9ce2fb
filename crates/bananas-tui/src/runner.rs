//! Main TUI runner - entry point for the interactive tester
//!
//! Creates an Engine on signal cells and adds terminal rendering and event
//! polling. Frames are only drawn when something visible changed: a cell
//! notified, a key was handled, the terminal was resized, or a run is in
//! flight and the spinner needs to move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bananas_app::config::Settings;
use bananas_app::message::Message;
use bananas_app::{Engine, ProbeClient, StateCells, SubscriptionId};
use bananas_core::prelude::*;

use crate::event::{self, TerminalEvent};
use crate::{render, terminal};

/// Run the TUI until the operator quits or a signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    let mut engine = Engine::new(settings, StateCells::signals);
    let redraw = RedrawFlag::watch(engine.cells());

    let mut term = terminal::init()?;
    let result = run_loop(&mut term, &mut engine, &redraw);
    terminal::restore();

    redraw.release(engine.cells());
    engine.shutdown().await;

    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<C>,
    redraw: &RedrawFlag,
) -> Result<()>
where
    C: ProbeClient + Sync + 'static,
{
    while !engine.should_quit() {
        // Signals and finished runs arrive on the channel
        if engine.drain_pending_messages() > 0 {
            redraw.request();
        }

        if redraw.take() || engine.state.is_running_test() {
            terminal.draw(|frame| render::view(frame, &engine.state))?;
        }

        match event::poll()? {
            TerminalEvent::Message(Message::Tick) => engine.process_message(Message::Tick),
            TerminalEvent::Message(message) => {
                engine.process_message(message);
                redraw.request();
            }
            TerminalEvent::Resize => redraw.request(),
            TerminalEvent::Ignored => {}
        }
    }

    Ok(())
}

/// Set by cell listeners, consumed by the render loop
struct RedrawFlag {
    dirty: Arc<AtomicBool>,
    subscriptions: [SubscriptionId; 3],
}

impl RedrawFlag {
    /// Subscribe to all three cells. Starts dirty so the first frame draws.
    fn watch(cells: &StateCells) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));

        let flag = Arc::clone(&dirty);
        let selection = cells
            .selection
            .subscribe(Box::new(move |_| flag.store(true, Ordering::Release)));
        let flag = Arc::clone(&dirty);
        let result = cells
            .result
            .subscribe(Box::new(move |_| flag.store(true, Ordering::Release)));
        let flag = Arc::clone(&dirty);
        let in_flight = cells
            .in_flight
            .subscribe(Box::new(move |_| flag.store(true, Ordering::Release)));

        Self {
            dirty,
            subscriptions: [selection, result, in_flight],
        }
    }

    fn request(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Whether a redraw is due; clears the flag
    fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    fn release(self, cells: &StateCells) {
        let [selection, result, in_flight] = self.subscriptions;
        cells.selection.unsubscribe(selection);
        cells.result.unsubscribe(result);
        cells.in_flight.unsubscribe(in_flight);
    }
}
