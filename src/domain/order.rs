//! Order domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
    Refunded,
}

/// Unknown values fall back to `Pending`.
impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "paid" => OrderStatus::Paid,
            "cancelled" => OrderStatus::Cancelled,
            "refunded" => OrderStatus::Refunded,
            _ => OrderStatus::Pending,
        }
    }
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    /// Human-facing order number
    #[schema(example = "ORD-20240101-0001")]
    pub order_no: String,
    pub user_id: Uuid,
    /// Order total in fen
    #[schema(example = 9900)]
    pub amount: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Whether the order still counts toward the ordered total
    pub fn is_billable(&self) -> bool {
        self.status != OrderStatus::Cancelled
    }
}
