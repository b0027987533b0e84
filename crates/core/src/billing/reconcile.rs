//! Status reconciliation and charge-level merge decisions.

use chrono::NaiveDate;
use estia_shared::types::ContractId;
use rust_decimal::Decimal;

use crate::calendar::{self, MonthKey};

use super::identity::transaction_id;
use super::types::{ChargeType, ContractKind, Transaction, TransactionStatus};

/// Re-evaluates a transaction status against the reference date.
///
/// `Paid` is authoritative and never recomputed. Every other status follows
/// the due date: strictly past the reference date means overdue, otherwise
/// unpaid.
#[must_use]
pub fn status_for(
    due_date: NaiveDate,
    today: NaiveDate,
    current: TransactionStatus,
) -> TransactionStatus {
    if current.is_paid() {
        return TransactionStatus::Paid;
    }
    if calendar::is_past(due_date, today) {
        TransactionStatus::Overdue
    } else {
        TransactionStatus::Unpaid
    }
}

/// The unconditional global pass: every stored, non-paid transaction has its
/// status re-evaluated against the reference date. Returns only the rows
/// whose status actually changed.
#[must_use]
pub fn refresh_statuses(existing: &[Transaction], today: NaiveDate) -> Vec<Transaction> {
    existing
        .iter()
        .filter_map(|tx| {
            let status = status_for(tx.due_date, today, tx.status);
            (status != tx.status).then(|| Transaction {
                status,
                ..tx.clone()
            })
        })
        .collect()
}

/// Fully-resolved desired state of one charge for one contract-month, ready
/// to become a ledger transaction.
#[derive(Debug, Clone)]
pub struct ChargeDraft {
    /// Contract being billed.
    pub contract_id: ContractId,
    /// Kind of the billing contract.
    pub contract_kind: ContractKind,
    /// Month being billed.
    pub target_month: MonthKey,
    /// Charge category.
    pub charge_type: ChargeType,
    /// Signed amount resolved from the governing term.
    pub amount: Decimal,
    /// Due date resolved from the term's payment day.
    pub due_date: NaiveDate,
}

impl ChargeDraft {
    /// Materializes the draft as a brand-new transaction, overdue when its
    /// due date is already past the reference date.
    #[must_use]
    pub fn into_transaction(self, today: NaiveDate) -> Transaction {
        Transaction {
            id: transaction_id(self.contract_id, self.target_month, self.charge_type),
            status: status_for(self.due_date, today, TransactionStatus::Unpaid),
            contract_id: self.contract_id,
            contract_kind: self.contract_kind,
            target_month: self.target_month,
            charge_type: self.charge_type,
            amount: self.amount,
            due_date: self.due_date,
            paid_date: None,
            tax_invoice_issued: false,
        }
    }
}

/// Decides how one desired charge merges into the stored ledger.
///
/// - no stored row for the key: create one
/// - stored row paid: settled history, leave untouched
/// - stored row otherwise: when the governing term moved its amount or due
///   date, overwrite in place and re-evaluate the status; when nothing
///   drifted, leave it alone
///
/// Returns the transaction to write, or `None` when the stored ledger is
/// already correct for this key.
#[must_use]
pub fn reconcile_charge(
    existing: Option<&Transaction>,
    draft: ChargeDraft,
    today: NaiveDate,
) -> Option<Transaction> {
    let Some(stored) = existing else {
        return Some(draft.into_transaction(today));
    };
    if stored.status.is_paid() {
        return None;
    }
    if stored.amount == draft.amount && stored.due_date == draft.due_date {
        return None;
    }
    Some(Transaction {
        amount: draft.amount,
        due_date: draft.due_date,
        status: status_for(draft.due_date, today, stored.status),
        ..stored.clone()
    })
}
