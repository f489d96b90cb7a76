//! # Store State
//!
//! Shares the dashboard [`Store`] with the command layer.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>`. Intents are handled one at a
//! time, so each runs to completion under the lock before the next starts.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Intent               Command                 Store access              │
//! │  ──────               ───────                 ────────────              │
//! │                                                                         │
//! │  get_session ───────► navigation::session ──► with_store (read)        │
//! │                                                                         │
//! │  create_employee ───► employee::create ─────► with_store_mut (write)   │
//! │                                                                         │
//! │  approve_leave ─────► leave::decide ────────► with_store_mut (write)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use inlin_store::Store;

use super::ConfigState;

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Seeded or empty, per `config.seed`.
    pub fn from_config(config: &ConfigState) -> Self {
        if config.seed {
            StoreState::new(Store::seeded())
        } else {
            StoreState::new(Store::new())
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store_state.with_store(|s| s.employees().len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        // A panic mid-command leaves a consistent store: every mutation
        // validates before it writes.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|s| s.employees_mut().create(form))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_seed_flag() {
        let seeded = StoreState::from_config(&ConfigState::default());
        assert_eq!(seeded.with_store(|s| s.users().len()), 4);

        let empty = StoreState::from_config(&ConfigState {
            seed: false,
            ..ConfigState::default()
        });
        assert_eq!(empty.with_store(|s| s.users().len()), 0);
    }

    #[test]
    fn test_clones_share_one_store() {
        let a = StoreState::new(Store::seeded());
        let b = a.clone();

        a.with_store_mut(|s| s.employees_mut().delete(1));

        assert_eq!(b.with_store(|s| s.employees().len()), 3);
    }
}
