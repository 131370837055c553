//! The state container: one owner of application state, a closed set of
//! operations, and snapshot-based reads.
//!
//! [`Store`] holds the current [`AppState`] behind an [`Arc`]. Each
//! successful [`Store::dispatch`] runs the pure reducer in [`state`],
//! swaps in the fresh snapshot atomically, and notifies subscribers.
//! Readers hold cheap immutable snapshots between operations; a snapshot
//! handed out is never mutated in place.
//!
//! The store is plain data passed by reference. There is no process-wide
//! singleton; whoever constructs it decides who gets to dispatch.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::{AppState, apply};

use std::sync::Arc;
use tracing::debug;

use crate::error::StoreError;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&AppState)>;

/// Owns the application state and applies operations to it.
pub struct Store {
    snapshot: Arc<AppState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    /// Create a store over an initial state.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self {
            snapshot: Arc::new(initial),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store over the hardcoded sample catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_state())
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.snapshot)
    }

    /// Apply one operation and return the new snapshot.
    ///
    /// Subscribers are notified after the swap, so every listener observes
    /// the same snapshot a concurrent-free reader would.
    ///
    /// # Errors
    ///
    /// Returns the reducer's [`StoreError`]; the held snapshot is unchanged
    /// and no listener is notified.
    pub fn dispatch(&mut self, action: &Action) -> Result<Arc<AppState>, StoreError> {
        let next = state::apply(&self.snapshot, action)?;
        self.snapshot = Arc::new(next);
        debug!(action = action.kind(), "operation applied");
        for (_, listener) in &self.listeners {
            listener(&self.snapshot);
        }
        Ok(Arc::clone(&self.snapshot))
    }

    /// Register a listener invoked with each new snapshot.
    pub fn subscribe(&mut self, listener: impl Fn(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < before
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("projects", &self.snapshot.projects.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Store};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    #[test]
    fn dispatch_returns_the_new_snapshot() {
        let mut store = Store::seeded();
        let next = store
            .dispatch(&Action::Like {
                project_id: "1".to_string(),
            })
            .expect("like");
        assert_eq!(next.project("1").map(|p| p.likes), Some(90));
        assert!(Arc::ptr_eq(&next, &store.state()));
    }

    #[test]
    fn readers_keep_their_old_snapshot() {
        let mut store = Store::seeded();
        let before = store.state();
        store
            .dispatch(&Action::RecordView {
                project_id: "1".to_string(),
            })
            .expect("view");
        // The earlier snapshot is unaffected by the dispatch.
        assert_eq!(before.project("1").map(|p| p.views), Some(1247));
        assert_eq!(store.state().project("1").map(|p| p.views), Some(1248));
    }

    #[test]
    fn subscribers_see_each_new_snapshot() {
        let mut store = Store::seeded();
        let seen = Rc::new(Cell::new(0u64));
        let seen_in_listener = Rc::clone(&seen);
        store.subscribe(move |state| {
            seen_in_listener.set(state.project("1").map_or(0, |p| p.likes));
        });

        store
            .dispatch(&Action::Like {
                project_id: "1".to_string(),
            })
            .expect("like");
        assert_eq!(seen.get(), 90);

        store
            .dispatch(&Action::Like {
                project_id: "1".to_string(),
            })
            .expect("like again");
        assert_eq!(seen.get(), 91);
    }

    #[test]
    fn failed_dispatch_notifies_nobody_and_keeps_state() {
        let mut store = Store::seeded();
        let calls = Rc::new(Cell::new(0u32));
        let calls_in_listener = Rc::clone(&calls);
        store.subscribe(move |_| calls_in_listener.set(calls_in_listener.get() + 1));

        let before = store.state();
        let result = store.dispatch(&Action::Like {
            project_id: "missing".to_string(),
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 0);
        assert!(Arc::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Store::seeded();
        let calls = Rc::new(Cell::new(0u32));
        let calls_in_listener = Rc::clone(&calls);
        let id = store.subscribe(move |_| calls_in_listener.set(calls_in_listener.get() + 1));

        store
            .dispatch(&Action::Like {
                project_id: "1".to_string(),
            })
            .expect("like");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store
            .dispatch(&Action::Like {
                project_id: "1".to_string(),
            })
            .expect("like");
        assert_eq!(calls.get(), 1);
    }
}
