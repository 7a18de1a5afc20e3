//! Ledger repository: read access to orders, payments and withdrawals.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Statement};

use super::entities::{order, payment, withdrawal};
use crate::domain::{FinancialReport, Order, Payment, Withdrawal};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Ledger repository trait for dependency injection.
///
/// Every read takes no arguments and returns the full data set; list
/// operations are ordered newest first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Aggregate a financial report over the whole ledger
    async fn generate_financial_report(&self) -> AppResult<FinancialReport>;

    /// List all orders
    async fn get_all_orders(&self) -> AppResult<Vec<Order>>;

    /// List all payments
    async fn get_all_payments(&self) -> AppResult<Vec<Payment>>;

    /// List all withdrawals
    async fn get_all_withdrawals(&self) -> AppResult<Vec<Withdrawal>>;

    /// Check connectivity to the backing store
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of LedgerRepository
pub struct LedgerStore {
    db: DatabaseConnection,
}

impl LedgerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LedgerRepository for LedgerStore {
    async fn generate_financial_report(&self) -> AppResult<FinancialReport> {
        let (orders, payments, withdrawals) = futures::try_join!(
            self.get_all_orders(),
            self.get_all_payments(),
            self.get_all_withdrawals(),
        )?;

        tracing::debug!(
            orders = orders.len(),
            payments = payments.len(),
            withdrawals = withdrawals.len(),
            "Compiling financial report"
        );

        Ok(FinancialReport::compile(
            &orders,
            &payments,
            &withdrawals,
            Utc::now(),
        ))
    }

    async fn get_all_orders(&self) -> AppResult<Vec<Order>> {
        let models = order::Entity::find()
            .order_by_desc(order::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn get_all_payments(&self) -> AppResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .order_by_desc(payment::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Payment::from).collect())
    }

    async fn get_all_withdrawals(&self) -> AppResult<Vec<Withdrawal>> {
        let models = withdrawal::Entity::find()
            .order_by_desc(withdrawal::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Withdrawal::from).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
