//! Payment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Payment, PaymentStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_id: Uuid,
    pub amount: i64,
    pub method: String,
    pub status: String,
    pub transaction_ref: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Payment {
    fn from(model: Model) -> Self {
        Payment {
            id: model.id,
            order_id: model.order_id,
            amount: model.amount,
            method: model.method,
            status: PaymentStatus::from(model.status.as_str()),
            transaction_ref: model.transaction_ref,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row(status: &str, transaction_ref: Option<&str>) -> Model {
        Model {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            amount: 9900,
            method: "alipay".to_string(),
            status: status.to_string(),
            transaction_ref: transaction_ref.map(String::from),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_converts_to_payment() {
        let model = row("refunded", Some("2024010122001"));
        let payment = Payment::from(model.clone());

        assert_eq!(payment.id, model.id);
        assert_eq!(payment.order_id, model.order_id);
        assert_eq!(payment.method, "alipay");
        assert_eq!(payment.status, PaymentStatus::Refunded);
        assert_eq!(payment.transaction_ref.as_deref(), Some("2024010122001"));
        assert_eq!(payment.created_at, model.created_at);
    }

    #[test]
    fn test_null_transaction_ref_and_unknown_status() {
        let payment = Payment::from(row("processing", None));
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert!(payment.transaction_ref.is_none());
    }
}
