//! Cash summary types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash summary over a set of ledger transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of income (positive) amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts, as a positive figure.
    pub total_expense: Decimal,
    /// Income already collected (paid).
    pub collected_income: Decimal,
    /// Income not yet collected (any non-paid status).
    pub pending_income: Decimal,
    /// Sum of overdue amounts, signed.
    pub overdue_amount: Decimal,
    /// Collected share of income, in percent with two decimals. Zero when
    /// there is no income.
    pub collection_rate: Decimal,
    /// Number of overdue transactions.
    pub overdue_count: usize,
}
