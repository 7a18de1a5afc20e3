//! Application configuration module
//!
//! Environment-driven settings plus defaults and the fixed ledger
//! failure messages.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
