//! Domain layer - Ledger entities and reporting
//!
//! Plain values returned by the ledger repository and re-emitted by the
//! HTTP layer. No infrastructure dependencies.

pub mod order;
pub mod payment;
pub mod report;
pub mod withdrawal;

pub use order::{Order, OrderStatus};
pub use payment::{Payment, PaymentStatus};
pub use report::FinancialReport;
pub use withdrawal::{Withdrawal, WithdrawalStatus};
