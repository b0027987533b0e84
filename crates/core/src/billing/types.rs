//! Ledger transaction types.

use chrono::NaiveDate;
use estia_shared::types::{ContractId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthKey;

/// Kind of contract a transaction was billed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    /// Lease contract (rent, admin fee, deposit).
    Lease,
    /// Maintenance contract (service cost).
    Maintenance,
}

/// One billable charge category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeType {
    /// Monthly rent.
    Rent,
    /// Monthly admin fee.
    AdminFee,
    /// Monthly maintenance service cost.
    MaintenanceCost,
    /// One-off security deposit.
    Deposit,
}

impl std::fmt::Display for ChargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rent => "rent",
            Self::AdminFee => "admin_fee",
            Self::MaintenanceCost => "maintenance_cost",
            Self::Deposit => "deposit",
        };
        f.write_str(name)
    }
}

/// Settlement state of a transaction.
///
/// `Unpaid` and `Overdue` transition automatically as the reference date
/// passes the due date. `Paid` and `Partial` are set externally; `Paid`
/// freezes the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Settled in full. Immutable from here on.
    Paid,
    /// Due date not yet passed.
    Unpaid,
    /// Due date passed without settlement.
    Overdue,
    /// Partially settled.
    Partial,
}

impl TransactionStatus {
    /// Returns true if the transaction is settled and frozen.
    #[must_use]
    pub fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

/// One billable line item: one contract, one month, one charge type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Deterministic identity derived from (contract, month, charge type).
    pub id: TransactionId,
    /// Contract this line item bills.
    pub contract_id: ContractId,
    /// Kind of the billing contract.
    pub contract_kind: ContractKind,
    /// Month being billed.
    pub target_month: MonthKey,
    /// Charge category.
    pub charge_type: ChargeType,
    /// Signed amount: positive income, negative expense.
    pub amount: Decimal,
    /// Date the payment falls due.
    pub due_date: NaiveDate,
    /// Settlement state.
    pub status: TransactionStatus,
    /// Date the payment was settled, once paid.
    pub paid_date: Option<NaiveDate>,
    /// Whether a tax invoice has been issued for this line item.
    pub tax_invoice_issued: bool,
}
