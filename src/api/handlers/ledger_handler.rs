//! Ledger reporting handlers.
//!
//! Each handler ignores the request entirely, performs one repository read
//! and wraps the result in the `{ success, ... }` envelope. Any failure is
//! logged and answered with a fixed message and HTTP 500.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{
    MSG_FINANCIAL_REPORT_FAILED, MSG_ORDERS_FAILED, MSG_PAYMENTS_FAILED, MSG_WITHDRAWALS_FAILED,
};
use crate::domain::{FinancialReport, Order, Payment, Withdrawal};
use crate::errors::{ApiFailure, ResultExt};
use crate::types::ApiResponse;

/// Orders payload: `{ success: true, orders: [...] }`
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

/// Payments payload: `{ success: true, payments: [...] }`
#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentList {
    pub payments: Vec<Payment>,
}

/// Withdrawals payload: `{ success: true, withdrawals: [...] }`
#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalList {
    pub withdrawals: Vec<Withdrawal>,
}

type LedgerResult<T> = Result<Json<ApiResponse<T>>, ApiFailure>;

/// Create ledger routes
pub fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/financial-report", get(financial_report))
        .route("/orders", get(list_orders))
        .route("/payments", get(list_payments))
        .route("/withdrawals", get(list_withdrawals))
}

/// Get the financial report (fields spread into the envelope)
#[utoipa::path(
    get,
    path = "/api/financial-report",
    tag = "Ledger",
    responses(
        (status = 200, description = "Financial report", body = FinancialReport),
        (status = 500, description = "获取财务报告失败")
    )
)]
pub async fn financial_report(State(state): State<AppState>) -> LedgerResult<FinancialReport> {
    let report = state
        .ledger
        .generate_financial_report()
        .await
        .or_fail(MSG_FINANCIAL_REPORT_FAILED)?;

    Ok(Json(ApiResponse::success(report)))
}

/// List all orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Ledger",
    responses(
        (status = 200, description = "All orders, newest first", body = OrderList),
        (status = 500, description = "获取订单列表失败")
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> LedgerResult<OrderList> {
    let orders = state
        .ledger
        .get_all_orders()
        .await
        .or_fail(MSG_ORDERS_FAILED)?;

    Ok(Json(ApiResponse::success(OrderList { orders })))
}

/// List all payments
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Ledger",
    responses(
        (status = 200, description = "All payments, newest first", body = PaymentList),
        (status = 500, description = "获取支付记录失败")
    )
)]
pub async fn list_payments(State(state): State<AppState>) -> LedgerResult<PaymentList> {
    let payments = state
        .ledger
        .get_all_payments()
        .await
        .or_fail(MSG_PAYMENTS_FAILED)?;

    Ok(Json(ApiResponse::success(PaymentList { payments })))
}

/// List all withdrawals
#[utoipa::path(
    get,
    path = "/api/withdrawals",
    tag = "Ledger",
    responses(
        (status = 200, description = "All withdrawals, newest first", body = WithdrawalList),
        (status = 500, description = "获取提现记录失败")
    )
)]
pub async fn list_withdrawals(State(state): State<AppState>) -> LedgerResult<WithdrawalList> {
    let withdrawals = state
        .ledger
        .get_all_withdrawals()
        .await
        .or_fail(MSG_WITHDRAWALS_FAILED)?;

    Ok(Json(ApiResponse::success(WithdrawalList { withdrawals })))
}
