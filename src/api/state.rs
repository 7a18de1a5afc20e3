//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, LedgerRepository, LedgerStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read access to the ledger
    pub ledger: Arc<dyn LedgerRepository>,
}

impl AppState {
    /// Create application state with a manually injected repository.
    pub fn new(ledger: Arc<dyn LedgerRepository>) -> Self {
        Self { ledger }
    }

    /// Create application state backed by the database.
    pub fn from_database(database: &Database) -> Self {
        Self::new(Arc::new(LedgerStore::new(database.get_connection())))
    }
}
