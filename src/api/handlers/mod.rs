//! HTTP request handlers.

pub mod ledger_handler;

pub use ledger_handler::ledger_routes;
