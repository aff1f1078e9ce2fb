//! Observable state cells
//!
//! Selection and result state are held in cells that notify subscribers on
//! write. Each presentation picks its own primitive:
//!
//! - [`SignalState`] - every `set` notifies, even when the value is unchanged
//!   (the TUI uses this to schedule redraws)
//! - [`WatchState`] - backed by `tokio::sync::watch`, notifies only when the
//!   value actually changes (headless mode uses this for its event stream)
//!
//! Listeners run synchronously on the writer's thread, after the new value
//! is visible through `get()`. No lock is held while they run, so a listener
//! may read the cell it is subscribed to.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tokio::sync::watch;

/// Callback invoked with the value just written
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`ObservableState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A mutable cell with subscriber notification on write
pub trait ObservableState<T>: Send + Sync {
    /// Snapshot of the current value
    fn get(&self) -> T;

    /// Replace the value and notify subscribers
    fn set(&self, value: T);

    /// Register a listener; it is not called for the current value
    fn subscribe(&self, listener: Listener<T>) -> SubscriptionId;

    /// Remove a listener. Returns false if it was already gone.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

type SharedListener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Listener bookkeeping shared by both cell kinds
struct Listeners<T> {
    next_id: AtomicU64,
    entries: Mutex<Vec<(SubscriptionId, SharedListener<T>)>>,
}

impl<T> Listeners<T> {
    fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entries: Mutex::new(Vec::new()),
        }
    }

    fn add(&self, listener: Listener<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::from(listener)));
        id
    }

    fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    fn notify(&self, value: &T) {
        // Snapshot so listeners may (un)subscribe without deadlocking
        let snapshot: Vec<SharedListener<T>> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }

    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

// ─────────────────────────────────────────────────────────────────
// SignalState
// ─────────────────────────────────────────────────────────────────

/// Signal-style cell: every write notifies
pub struct SignalState<T> {
    value: RwLock<T>,
    listeners: Listeners<T>,
}

impl<T: Clone + Send + Sync> SignalState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            listeners: Listeners::new(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: Clone + Send + Sync> ObservableState<T> for SignalState<T> {
    fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, value: T) {
        {
            let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
            *guard = value.clone();
        }
        self.listeners.notify(&value);
    }

    fn subscribe(&self, listener: Listener<T>) -> SubscriptionId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }
}

impl<T: fmt::Debug> fmt::Debug for SignalState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalState")
            .field("value", &*self.value.read().unwrap_or_else(PoisonError::into_inner))
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────
// WatchState
// ─────────────────────────────────────────────────────────────────

/// Fine-grained cell over a watch channel: only real changes notify
pub struct WatchState<T> {
    tx: watch::Sender<T>,
    listeners: Listeners<T>,
}

impl<T: Clone + PartialEq + Send + Sync> WatchState<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            listeners: Listeners::new(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: Clone + PartialEq + Send + Sync> ObservableState<T> for WatchState<T> {
    fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    fn set(&self, value: T) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value.clone();
                true
            }
        });

        if changed {
            self.listeners.notify(&value);
        }
    }

    fn subscribe(&self, listener: Listener<T>) -> SubscriptionId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }
}

impl<T: fmt::Debug> fmt::Debug for WatchState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchState")
            .field("value", &*self.tx.borrow())
            .finish_non_exhaustive()
    }
}
