//! Financial report aggregated over the whole ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Order, OrderStatus, Payment, PaymentStatus, Withdrawal, WithdrawalStatus};

/// Ledger-wide financial summary. All amounts are in fen.
///
/// Spread directly into the response envelope, so no field may be named
/// `success` or `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FinancialReport {
    pub order_count: u64,
    pub paid_order_count: u64,
    /// Sum over all orders that are not cancelled
    pub total_order_amount: i64,
    pub payment_count: u64,
    /// Sum of successful payments
    pub total_income: i64,
    /// Sum of refunded payments
    pub total_refunded: i64,
    pub withdrawal_count: u64,
    /// Sum of completed withdrawals
    pub total_withdrawn: i64,
    /// Sum of withdrawals still awaiting processing
    pub pending_withdrawal_amount: i64,
    /// `total_income - total_withdrawn - pending_withdrawal_amount`
    pub balance: i64,
    pub generated_at: DateTime<Utc>,
}

impl FinancialReport {
    /// Aggregate a report from full ledger snapshots.
    pub fn compile(
        orders: &[Order],
        payments: &[Payment],
        withdrawals: &[Withdrawal],
        generated_at: DateTime<Utc>,
    ) -> Self {
        let total_order_amount = sum(orders.iter().filter(|o| o.is_billable()).map(|o| o.amount));
        let paid_order_count = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Paid)
            .count() as u64;

        let payments_with = |status: PaymentStatus| {
            sum(payments
                .iter()
                .filter(move |p| p.status == status)
                .map(|p| p.amount))
        };
        let withdrawals_with = |status: WithdrawalStatus| {
            sum(withdrawals
                .iter()
                .filter(move |w| w.status == status)
                .map(|w| w.amount))
        };

        let total_income = payments_with(PaymentStatus::Success);
        let total_refunded = payments_with(PaymentStatus::Refunded);
        let total_withdrawn = withdrawals_with(WithdrawalStatus::Completed);
        let pending_withdrawal_amount = withdrawals_with(WithdrawalStatus::Pending);

        Self {
            order_count: orders.len() as u64,
            paid_order_count,
            total_order_amount,
            payment_count: payments.len() as u64,
            total_income,
            total_refunded,
            withdrawal_count: withdrawals.len() as u64,
            total_withdrawn,
            pending_withdrawal_amount,
            balance: total_income
                .saturating_sub(total_withdrawn)
                .saturating_sub(pending_withdrawal_amount),
            generated_at,
        }
    }
}

fn sum(amounts: impl Iterator<Item = i64>) -> i64 {
    amounts.fold(0i64, i64::saturating_add)
}
