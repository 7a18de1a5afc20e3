//! Withdrawal database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Withdrawal, WithdrawalStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "withdrawals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub account: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    /// NULL until the withdrawal is completed or rejected
    pub processed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Withdrawal {
    fn from(model: Model) -> Self {
        Withdrawal {
            id: model.id,
            user_id: model.user_id,
            amount: model.amount,
            account: model.account,
            status: WithdrawalStatus::from(model.status.as_str()),
            created_at: model.created_at,
            processed_at: model.processed_at,
        }
    }
}
