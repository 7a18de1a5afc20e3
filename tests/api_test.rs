//! Integration tests for API endpoints.
//!
//! These tests drive the real router with a stub ledger repository, so no
//! database connection is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use ledger_api::api::{create_router, AppState};
use ledger_api::config::{
    MSG_FINANCIAL_REPORT_FAILED, MSG_ORDERS_FAILED, MSG_PAYMENTS_FAILED, MSG_WITHDRAWALS_FAILED,
};
use ledger_api::domain::{
    FinancialReport, Order, OrderStatus, Payment, PaymentStatus, Withdrawal, WithdrawalStatus,
};
use ledger_api::errors::{AppError, AppResult};
use ledger_api::infra::LedgerRepository;

// =============================================================================
// Stub Repository
// =============================================================================

/// Stub ledger that returns fixed data, or fails every call
#[derive(Clone, Default)]
struct StubLedger {
    report: FinancialReport,
    orders: Vec<Order>,
    payments: Vec<Payment>,
    withdrawals: Vec<Withdrawal>,
    failing: bool,
}

impl StubLedger {
    fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> AppResult<()> {
        if self.failing {
            Err(AppError::Database(sea_orm::DbErr::Conn(
                sea_orm::RuntimeErr::Internal("connection refused".to_string()),
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LedgerRepository for StubLedger {
    async fn generate_financial_report(&self) -> AppResult<FinancialReport> {
        self.check()?;
        Ok(self.report.clone())
    }

    async fn get_all_orders(&self) -> AppResult<Vec<Order>> {
        self.check()?;
        Ok(self.orders.clone())
    }

    async fn get_all_payments(&self) -> AppResult<Vec<Payment>> {
        self.check()?;
        Ok(self.payments.clone())
    }

    async fn get_all_withdrawals(&self) -> AppResult<Vec<Withdrawal>> {
        self.check()?;
        Ok(self.withdrawals.clone())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check()
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn fixture() -> StubLedger {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
    let user_id = Uuid::new_v4();
    let order_id = Uuid::new_v4();

    let orders = vec![Order {
        id: order_id,
        order_no: "ORD-20240301-0001".to_string(),
        user_id,
        amount: 12800,
        status: OrderStatus::Paid,
        created_at: at,
        updated_at: at,
    }];
    let payments = vec![Payment {
        id: Uuid::new_v4(),
        order_id,
        amount: 12800,
        method: "alipay".to_string(),
        status: PaymentStatus::Success,
        transaction_ref: Some("2024030122001".to_string()),
        created_at: at,
    }];
    let withdrawals = vec![Withdrawal {
        id: Uuid::new_v4(),
        user_id,
        amount: 5000,
        account: "6222021234567890".to_string(),
        status: WithdrawalStatus::Completed,
        created_at: at,
        processed_at: Some(at),
    }];
    let report = FinancialReport::compile(&orders, &payments, &withdrawals, at);

    StubLedger {
        report,
        orders,
        payments,
        withdrawals,
        failing: false,
    }
}

fn app(ledger: StubLedger) -> Router {
    create_router(AppState::new(Arc::new(ledger)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

// =============================================================================
// Success Envelopes
// =============================================================================

#[tokio::test]
async fn test_orders_success_envelope() {
    let ledger = fixture();
    let expected = json!({ "success": true, "orders": ledger.orders });

    let (status, body) = get(app(ledger), "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_payments_success_envelope() {
    let ledger = fixture();
    let expected = json!({ "success": true, "payments": ledger.payments });

    let (status, body) = get(app(ledger), "/api/payments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_withdrawals_success_envelope() {
    let ledger = fixture();
    let expected = json!({ "success": true, "withdrawals": ledger.withdrawals });

    let (status, body) = get(app(ledger), "/api/withdrawals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_financial_report_is_spread_into_envelope() {
    let ledger = fixture();
    let mut expected = serde_json::to_value(&ledger.report).unwrap();
    expected["success"] = json!(true);

    let (status, body) = get(app(ledger), "/api/financial-report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
    assert_eq!(body["total_income"], 12800);
    assert_eq!(body["balance"], 7800);
    assert!(body.get("report").is_none());
}

#[tokio::test]
async fn test_empty_orders_is_not_an_error() {
    let (status, body) = get(app(StubLedger::default()), "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "orders": [] }));
}

// =============================================================================
// Failure Envelopes
// =============================================================================

#[tokio::test]
async fn test_failures_use_fixed_messages() {
    let cases = [
        ("/api/financial-report", MSG_FINANCIAL_REPORT_FAILED),
        ("/api/orders", MSG_ORDERS_FAILED),
        ("/api/payments", MSG_PAYMENTS_FAILED),
        ("/api/withdrawals", MSG_WITHDRAWALS_FAILED),
    ];

    for (uri, message) in cases {
        let (status, body) = get(app(StubLedger::failing()), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body, json!({ "success": false, "message": message }), "{}", uri);
    }
}

#[tokio::test]
async fn test_financial_report_failure_exact_body() {
    let (status, body) = get(app(StubLedger::failing()), "/api/financial-report").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "message": "获取财务报告失败" })
    );
}

#[tokio::test]
async fn test_failure_does_not_leak_error_detail() {
    let (_, body) = get(app(StubLedger::failing()), "/api/payments").await;
    let text = body.to_string();
    assert!(!text.contains("connection refused"));
    assert!(!text.contains("DATABASE_ERROR"));
}

// =============================================================================
// Request Input Is Ignored
// =============================================================================

#[tokio::test]
async fn test_request_input_does_not_change_response() {
    let ledger = fixture();
    let (_, plain) = get(app(ledger.clone()), "/api/orders").await;

    let request = Request::builder()
        .uri("/api/orders?page=2&limit=1&status=cancelled")
        .header("content-type", "application/json")
        .header("authorization", "Bearer whatever")
        .body(Body::from(r#"{"filter":"none"}"#))
        .unwrap();
    let (status, noisy) = send(app(ledger), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plain, noisy);
}

#[tokio::test]
async fn test_only_get_is_routed() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app(fixture()), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = get(app(fixture()), "/api/refunds").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Health & Root
// =============================================================================

#[tokio::test]
async fn test_health_reports_healthy_database() {
    let (status, body) = get(app(fixture()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "healthy", "services": { "database": { "status": "healthy" } } })
    );
}

#[tokio::test]
async fn test_health_degraded_when_database_unreachable() {
    let (status, body) = get(app(StubLedger::failing()), "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
    assert_eq!(body["services"]["database"]["error"], "Database error");
}

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app(fixture()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Welcome to Ledger API");
}
