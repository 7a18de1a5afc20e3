//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration.

use utoipa::OpenApi;

use crate::api::handlers::ledger_handler;
use crate::domain::{
    FinancialReport, Order, OrderStatus, Payment, PaymentStatus, Withdrawal, WithdrawalStatus,
};

/// OpenAPI documentation for the Ledger API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledger API",
        version = "0.1.0",
        description = "Read-only reporting over orders, payments and withdrawals",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        ledger_handler::financial_report,
        ledger_handler::list_orders,
        ledger_handler::list_payments,
        ledger_handler::list_withdrawals,
    ),
    components(
        schemas(
            // Domain types
            Order,
            OrderStatus,
            Payment,
            PaymentStatus,
            Withdrawal,
            WithdrawalStatus,
            FinancialReport,
            // Envelope payloads
            ledger_handler::OrderList,
            ledger_handler::PaymentList,
            ledger_handler::WithdrawalList,
        )
    ),
    tags(
        (name = "Ledger", description = "Orders, payments, withdrawals and financial reporting")
    )
)]
pub struct ApiDoc;
