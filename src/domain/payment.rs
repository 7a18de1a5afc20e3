//! Payment domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Payment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Success,
    Failed,
    Refunded,
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s {
            "success" => PaymentStatus::Success,
            "failed" => PaymentStatus::Failed,
            "refunded" => PaymentStatus::Refunded,
            _ => PaymentStatus::Pending,
        }
    }
}

/// Payment made against an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    pub order_id: Uuid,
    /// Amount in fen
    #[schema(example = 9900)]
    pub amount: i64,
    /// Payment channel, e.g. `wechat` or `alipay`
    #[schema(example = "wechat")]
    pub method: String,
    pub status: PaymentStatus,
    /// Reference assigned by the payment channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}
