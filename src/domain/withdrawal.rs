//! Withdrawal domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Withdrawal status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Completed,
    Rejected,
}

impl From<&str> for WithdrawalStatus {
    fn from(s: &str) -> Self {
        match s {
            "completed" => WithdrawalStatus::Completed,
            "rejected" => WithdrawalStatus::Rejected,
            _ => WithdrawalStatus::Pending,
        }
    }
}

/// Funds withdrawal request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Withdrawal {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Amount in fen
    #[schema(example = 50000)]
    pub amount: i64,
    /// Destination account
    pub account: String,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
    /// Set once the withdrawal is completed or rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}
