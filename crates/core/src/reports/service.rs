//! Cash summary computation.

use rust_decimal::Decimal;

use crate::billing::{Transaction, TransactionStatus};
use crate::calendar::MonthKey;

use super::types::FinancialSummary;

/// Service for summarizing the transaction ledger.
pub struct ReportService;

impl ReportService {
    /// Summarizes the whole transaction set.
    #[must_use]
    pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
        Self::fold(transactions.iter())
    }

    /// Summarizes one target month.
    #[must_use]
    pub fn summarize_month(transactions: &[Transaction], month: MonthKey) -> FinancialSummary {
        Self::fold(transactions.iter().filter(|tx| tx.target_month == month))
    }

    fn fold<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> FinancialSummary {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        let mut collected_income = Decimal::ZERO;
        let mut pending_income = Decimal::ZERO;
        let mut overdue_amount = Decimal::ZERO;
        let mut overdue_count = 0usize;

        for tx in transactions {
            if tx.amount > Decimal::ZERO {
                total_income += tx.amount;
                if tx.status == TransactionStatus::Paid {
                    collected_income += tx.amount;
                } else {
                    pending_income += tx.amount;
                }
            } else if tx.amount < Decimal::ZERO {
                total_expense += tx.amount.abs();
            }
            if tx.status == TransactionStatus::Overdue {
                overdue_amount += tx.amount;
                overdue_count += 1;
            }
        }

        let collection_rate = if total_income.is_zero() {
            Decimal::ZERO
        } else {
            (collected_income / total_income * Decimal::ONE_HUNDRED).round_dp(2)
        };

        FinancialSummary {
            total_income,
            total_expense,
            collected_income,
            pending_income,
            overdue_amount,
            collection_rate,
            overdue_count,
        }
    }
}
