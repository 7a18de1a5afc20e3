//! Ledger API - read-only reporting over orders, payments and withdrawals
//!
//! Four GET endpoints under `/api` each perform a single ledger read and
//! answer with a `{ success, ... }` envelope, or a fixed failure message
//! with HTTP 500.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Ledger entities and the financial report
//! - **infra**: Database, migrations and the ledger repository
//! - **api**: HTTP handlers, routes and OpenAPI docs
//! - **types**: Response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{ApiFailure, AppError, AppResult};
pub use infra::LedgerRepository;
