//! Shared application state for all routes.

use crate::config::UpdatePolicy;
use crate::error::AppError;
use crate::store::BugStore;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone)]
pub struct AppState {
    /// One store per process (or per test). Every operation holds the lock for its whole duration.
    pub store: Arc<RwLock<BugStore>>,
    pub update_policy: UpdatePolicy,
}

impl AppState {
    pub fn new(store: BugStore, update_policy: UpdatePolicy) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            update_policy,
        }
    }

    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, BugStore>, AppError> {
        self.store.read().map_err(|_| AppError::Internal("state lock".into()))
    }

    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, BugStore>, AppError> {
        self.store.write().map_err(|_| AppError::Internal("state lock".into()))
    }
}
