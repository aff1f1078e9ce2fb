//! bananas-app - Application state, test runner and orchestration
//!
//! This crate implements the selection and result state on observable cells,
//! the test runner and its probe client, the TEA (The Elm Architecture) update
//! loop, the Engine shared by the TUI and headless presentations, and
//! configuration loading.

pub mod actions;
pub mod cells;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod observable;
pub mod probe;
pub mod process;
pub mod results;
pub mod runner;
pub mod selection;
pub mod signals;
pub mod state;

// Re-export primary types
pub use cells::StateCells;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use observable::{Listener, ObservableState, SignalState, SubscriptionId, WatchState};
pub use probe::{HttpProbeClient, LocalProbeClient, ProbeClient, ProbeError};
pub use results::{InFlightGuard, ResultState};
pub use runner::TestRunner;
pub use selection::SelectionState;
pub use state::{AppPhase, AppState, Focus};
