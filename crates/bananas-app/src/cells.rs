//! The observable cells a presentation supplies to the engine

use std::sync::Arc;

use bananas_core::{Catalogs, Selection, TestResult};

use crate::observable::{ObservableState, SignalState, WatchState};
use crate::results::ResultState;
use crate::selection::SelectionState;

/// Selection, result and in-flight cells for one engine
#[derive(Clone)]
pub struct StateCells {
    pub selection: Arc<dyn ObservableState<Selection>>,
    pub result: Arc<dyn ObservableState<Option<TestResult>>>,
    pub in_flight: Arc<dyn ObservableState<bool>>,
}

impl StateCells {
    /// Signal cells: every write notifies
    pub fn signals(initial: Selection) -> Self {
        Self {
            selection: Arc::new(SignalState::new(initial)),
            result: Arc::new(SignalState::new(None)),
            in_flight: Arc::new(SignalState::new(false)),
        }
    }

    /// Watch cells: only real changes notify
    pub fn watched(initial: Selection) -> Self {
        Self {
            selection: Arc::new(WatchState::new(initial)),
            result: Arc::new(WatchState::new(None)),
            in_flight: Arc::new(WatchState::new(false)),
        }
    }

    pub fn selection_state(&self, catalogs: &'static Catalogs) -> SelectionState {
        SelectionState::new(Arc::clone(&self.selection), catalogs)
    }

    pub fn result_state(&self) -> ResultState {
        ResultState::new(Arc::clone(&self.result), Arc::clone(&self.in_flight))
    }
}
