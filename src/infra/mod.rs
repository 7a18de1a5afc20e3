//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and the ledger repository.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{LedgerRepository, LedgerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockLedgerRepository;
