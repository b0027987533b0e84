//! Recurring billing ledger.
//!
//! This module derives the monthly ledger of rent, admin-fee, and
//! maintenance-cost transactions from contracts and keeps it reconciled as
//! contracts change:
//! - Deterministic transaction identity
//! - Status reconciliation against an injected reference date
//! - The ledger generator (bounded monthly walk over all contracts)
//! - Manual settlement entry points (mark paid, reopen, edit, deposit)

pub mod error;
pub mod generator;
pub mod identity;
pub mod reconcile;
pub mod settlement;
pub mod types;


#[cfg(test)]
mod generator_props;

pub use error::BillingError;
pub use generator::{GenerationOutcome, HORIZON_YEARS, LedgerGenerator, MAINTENANCE_DUE_DAY};
pub use identity::transaction_id;
pub use reconcile::{ChargeDraft, reconcile_charge, refresh_statuses, status_for};
pub use settlement::{apply_manual_edit, deposit_transaction, mark_paid, reopen};
pub use types::{ChargeType, ContractKind, Transaction, TransactionStatus};
