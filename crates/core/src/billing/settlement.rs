//! Manual settlement entry points.
//!
//! The transaction store owns these mutations; the generator treats their
//! outcome as authoritative. Each is a pure `Transaction -> Transaction`
//! derivation the store applies and persists.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::MonthKey;
use crate::contract::{FinancialTerm, LeaseContract, LeaseKind};

use super::error::BillingError;
use super::identity::transaction_id;
use super::reconcile::status_for;
use super::types::{ChargeType, ContractKind, Transaction, TransactionStatus};

/// Marks a transaction paid on the given date.
///
/// Re-marking an already paid transaction just moves the paid date. The
/// date is passed in, not read from a clock, so settlement stays
/// reproducible.
#[must_use]
pub fn mark_paid(tx: &Transaction, paid_date: NaiveDate) -> Transaction {
    Transaction {
        status: TransactionStatus::Paid,
        paid_date: Some(paid_date),
        ..tx.clone()
    }
}

/// Reverts a settled or partial transaction to the unpaid track, clearing
/// the paid date and re-evaluating overdue against the reference date.
#[must_use]
pub fn reopen(tx: &Transaction, today: NaiveDate) -> Transaction {
    Transaction {
        status: status_for(tx.due_date, today, TransactionStatus::Unpaid),
        paid_date: None,
        ..tx.clone()
    }
}

/// Applies a manual amount/due-date edit, re-evaluating the status.
///
/// # Errors
///
/// Returns [`BillingError::PaidTransactionImmutable`] for paid
/// transactions: settled financial history stays frozen.
pub fn apply_manual_edit(
    tx: &Transaction,
    amount: Decimal,
    due_date: NaiveDate,
    today: NaiveDate,
) -> Result<Transaction, BillingError> {
    if tx.status.is_paid() {
        return Err(BillingError::PaidTransactionImmutable(tx.id));
    }
    Ok(Transaction {
        amount,
        due_date,
        status: status_for(due_date, today, tx.status),
        ..tx.clone()
    })
}

/// Builds the one-off deposit transaction for a lease financial term.
///
/// Deposits are not part of the monthly walk; they are entered when a term
/// is agreed, due on the term's first day. Identity is keyed on the month
/// the term starts, so a term period carries at most one deposit line.
#[must_use]
pub fn deposit_transaction(
    contract: &LeaseContract,
    term: &FinancialTerm,
    today: NaiveDate,
) -> Transaction {
    let month = MonthKey::of(term.start_date);
    let amount = if contract.kind == LeaseKind::InboundLease {
        -term.deposit
    } else {
        term.deposit
    };
    Transaction {
        id: transaction_id(contract.id, month, ChargeType::Deposit),
        contract_id: contract.id,
        contract_kind: ContractKind::Lease,
        target_month: month,
        charge_type: ChargeType::Deposit,
        amount,
        due_date: term.start_date,
        status: status_for(term.start_date, today, TransactionStatus::Unpaid),
        paid_date: None,
        tax_invoice_issued: false,
    }
}
