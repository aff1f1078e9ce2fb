//! Selection state: the (framework, orm, endpoint) triple driving the next run

use std::fmt;
use std::sync::Arc;

use bananas_core::prelude::*;
use bananas_core::{Catalogs, Selection};

use crate::observable::ObservableState;

/// Current selection, backed by an observable cell
///
/// Updates are keyed by identifier. An identifier the catalog does not know
/// leaves the selection untouched.
#[derive(Clone)]
pub struct SelectionState {
    cell: Arc<dyn ObservableState<Selection>>,
    catalogs: &'static Catalogs,
}

impl SelectionState {
    pub fn new(cell: Arc<dyn ObservableState<Selection>>, catalogs: &'static Catalogs) -> Self {
        Self { cell, catalogs }
    }

    /// Select a framework by `value`. Returns false if it is not in the catalog.
    pub fn set_framework(&self, value: &str) -> bool {
        match self.catalogs.frameworks.lookup(value) {
            Some(framework) => {
                self.cell.set(self.cell.get().with_framework(framework));
                true
            }
            None => {
                debug!("Ignoring unknown framework: {}", value);
                false
            }
        }
    }

    /// Select an ORM by `value`. Returns false if it is not in the catalog.
    pub fn set_orm(&self, value: &str) -> bool {
        match self.catalogs.orms.lookup(value) {
            Some(orm) => {
                self.cell.set(self.cell.get().with_orm(orm));
                true
            }
            None => {
                debug!("Ignoring unknown orm: {}", value);
                false
            }
        }
    }

    /// Select an endpoint by `path`. Returns false if it is not in the catalog.
    pub fn set_endpoint(&self, path: &str) -> bool {
        match self.catalogs.endpoints.lookup(path) {
            Some(endpoint) => {
                self.cell.set(self.cell.get().with_endpoint(endpoint));
                true
            }
            None => {
                debug!("Ignoring unknown endpoint: {}", path);
                false
            }
        }
    }

    /// Snapshot of the full selection
    pub fn current(&self) -> Selection {
        self.cell.get()
    }

    pub fn catalogs(&self) -> &'static Catalogs {
        self.catalogs
    }

    /// The underlying cell, for subscribing to changes
    pub fn cell(&self) -> &Arc<dyn ObservableState<Selection>> {
        &self.cell
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("current", &self.current())
            .finish()
    }
}
