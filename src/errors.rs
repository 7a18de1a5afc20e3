//! Centralized error handling.
//!
//! `AppError` is the error type for repository, database and CLI paths.
//! Ledger endpoints never expose it: they collapse every failure into an
//! [`ApiFailure`] carrying a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ApiResponse;

/// Application error types
///
/// `Display` never includes the underlying cause; use `Debug` for logs.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

// =============================================================================
// Ledger endpoint failures
// =============================================================================

/// Opaque endpoint failure: always HTTP 500 with a fixed message.
///
/// The underlying error is logged when the failure is created and then
/// dropped, so nothing about it reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiFailure {
    message: &'static str,
}

impl ApiFailure {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::failure(self.message)),
        )
            .into_response()
    }
}

/// Collapse any error into an [`ApiFailure`] with a fixed message.
pub trait ResultExt<T> {
    fn or_fail(self, message: &'static str) -> Result<T, ApiFailure>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for Result<T, E> {
    fn or_fail(self, message: &'static str) -> Result<T, ApiFailure> {
        self.map_err(|e| {
            tracing::error!(error = ?e, "{}", message);
            ApiFailure::new(message)
        })
    }
}
