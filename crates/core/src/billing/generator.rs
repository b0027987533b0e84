//! The recurring-billing ledger generator.
//!
//! A pure function of (contracts, stored transactions, reference date): it
//! walks every billable contract month by month, resolves the governing
//! financial term, and reconciles the derived charges against the stored
//! ledger. It never mutates its inputs, never deletes, and never touches a
//! paid transaction, so the caller can re-run it on every contract change
//! and merge the diff in one batch.

use std::collections::{BTreeMap, HashMap};

use chrono::{Months, NaiveDate};
use estia_shared::types::TransactionId;
use rust_decimal::Decimal;
use tracing::info;

use crate::calendar::{MonthIter, clamp_payment_day};
use crate::contract::{LeaseContract, LeaseKind, MaintenanceContract, resolve_term_for_month};

use super::identity::transaction_id;
use super::reconcile::{ChargeDraft, reconcile_charge, refresh_statuses};
use super::types::{ChargeType, ContractKind, Transaction};

/// Forward horizon in years bounding the walk for open-ended contracts.
pub const HORIZON_YEARS: u32 = 2;

/// Fixed due day for maintenance costs, valid in every month.
pub const MAINTENANCE_DUE_DAY: u32 = 25;

/// The diff one generation run wants persisted.
///
/// `new_transactions` are inserts; `updated_transactions` are in-place
/// overwrites keyed by transaction ID. Both empty means the stored ledger
/// has already converged and the caller should skip the store write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Transactions seen for the first time this run.
    pub new_transactions: Vec<Transaction>,
    /// Stored transactions that drifted and need overwriting.
    pub updated_transactions: Vec<Transaction>,
}

impl GenerationOutcome {
    /// True when the stored ledger needs no mutation.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.new_transactions.is_empty() && self.updated_transactions.is_empty()
    }

    /// Applies this diff to a stored snapshot: overwrites updated rows in
    /// place and appends the new rows. Convenience for callers holding the
    /// ledger in memory.
    #[must_use]
    pub fn merge_into(&self, existing: &[Transaction]) -> Vec<Transaction> {
        let updated: HashMap<TransactionId, &Transaction> = self
            .updated_transactions
            .iter()
            .map(|tx| (tx.id, tx))
            .collect();
        existing
            .iter()
            .map(|tx| updated.get(&tx.id).map_or_else(|| tx.clone(), |u| (*u).clone()))
            .chain(self.new_transactions.iter().cloned())
            .collect()
    }
}

/// Derives the expected ledger from contracts and reconciles it against the
/// stored transaction set.
pub struct LedgerGenerator;

impl LedgerGenerator {
    /// Runs one full generation pass.
    ///
    /// The reference date is injected rather than read from a clock, so the
    /// run is reproducible. Steps:
    /// 1. Global status refresh: non-paid stored rows move unpaid/overdue
    ///    against `today`, independent of any contract change.
    /// 2. Lease walk: for every non-pending lease, every month from the
    ///    overall start to the capped end, the governing financial term
    ///    prices rent and admin fee (each only when positive), signed by
    ///    lease direction.
    /// 3. Maintenance walk: flat monthly cost, due on the 25th, always an
    ///    expense.
    #[must_use]
    pub fn generate(
        leases: &[LeaseContract],
        maintenance: &[MaintenanceContract],
        existing: &[Transaction],
        today: NaiveDate,
    ) -> GenerationOutcome {
        let horizon = future_cap(today);
        let stored: HashMap<TransactionId, &Transaction> =
            existing.iter().map(|tx| (tx.id, tx)).collect();

        let mut new_transactions: Vec<Transaction> = Vec::new();
        let mut updated: BTreeMap<TransactionId, Transaction> = BTreeMap::new();

        for tx in refresh_statuses(existing, today) {
            updated.insert(tx.id, tx);
        }

        let mut scanned = 0usize;

        for contract in leases.iter().filter(|c| c.is_billable()) {
            scanned += 1;
            let end = effective_end(contract.term.overall_end, horizon);
            let is_expense = contract.kind == LeaseKind::InboundLease;

            for month in MonthIter::new(contract.term.overall_start, end) {
                let Some(term) = resolve_term_for_month(&contract.financial_terms, month) else {
                    // no financial coverage: the contract bills nothing this month
                    continue;
                };
                let due_date = clamp_payment_day(month, term.payment_day);

                for (charge_type, amount) in [
                    (ChargeType::Rent, term.monthly_rent),
                    (ChargeType::AdminFee, term.admin_fee),
                ] {
                    if amount <= Decimal::ZERO {
                        // zero charge is a valid "nothing due this period"
                        continue;
                    }
                    let draft = ChargeDraft {
                        contract_id: contract.id,
                        contract_kind: ContractKind::Lease,
                        target_month: month,
                        charge_type,
                        amount: if is_expense { -amount } else { amount },
                        due_date,
                    };
                    Self::reconcile_into(
                        draft,
                        &stored,
                        &mut updated,
                        &mut new_transactions,
                        today,
                    );
                }
            }
        }

        for contract in maintenance.iter().filter(|c| c.is_billable()) {
            scanned += 1;
            if contract.monthly_cost <= Decimal::ZERO {
                continue;
            }
            let end = effective_end(contract.term.end_date, horizon);

            for month in MonthIter::new(contract.term.start_date, end) {
                let draft = ChargeDraft {
                    contract_id: contract.id,
                    contract_kind: ContractKind::Maintenance,
                    target_month: month,
                    charge_type: ChargeType::MaintenanceCost,
                    amount: -contract.monthly_cost,
                    due_date: clamp_payment_day(month, MAINTENANCE_DUE_DAY),
                };
                Self::reconcile_into(draft, &stored, &mut updated, &mut new_transactions, today);
            }
        }

        let outcome = GenerationOutcome {
            new_transactions,
            updated_transactions: updated.into_values().collect(),
        };
        info!(
            contracts = scanned,
            created = outcome.new_transactions.len(),
            updated = outcome.updated_transactions.len(),
            "ledger generation completed"
        );
        outcome
    }

    /// Reconciles one charge draft against the stored ledger, routing the
    /// result to the new or updated set. An update produced earlier this run
    /// (a status refresh, typically) is the row reconciled against, so a
    /// single run never emits two versions of the same transaction.
    fn reconcile_into(
        draft: ChargeDraft,
        stored: &HashMap<TransactionId, &Transaction>,
        updated: &mut BTreeMap<TransactionId, Transaction>,
        new_transactions: &mut Vec<Transaction>,
        today: NaiveDate,
    ) {
        let id = transaction_id(draft.contract_id, draft.target_month, draft.charge_type);
        let pending = updated.get(&id).cloned();
        let current = pending.as_ref().or_else(|| stored.get(&id).copied());

        if let Some(tx) = reconcile_charge(current, draft, today) {
            if stored.contains_key(&id) {
                updated.insert(id, tx);
            } else {
                new_transactions.push(tx);
            }
        }
    }
}

/// Forward cap bounding the walk: two years past the reference date.
fn future_cap(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(12 * HORIZON_YEARS))
        .unwrap_or(NaiveDate::MAX)
}

/// Effective end of a contract's walk: its own end when bounded, the horizon
/// otherwise, and never past the horizon.
fn effective_end(contract_end: Option<NaiveDate>, horizon: NaiveDate) -> NaiveDate {
    contract_end.map_or(horizon, |end| end.min(horizon))
}
