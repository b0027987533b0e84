//! Property-based tests for the ledger generator.
//!
//! The properties that make regeneration safe to run on every contract
//! change: stable identity, idempotent convergence, the forward horizon,
//! and paid-history immutability.

use chrono::NaiveDate;
use estia_shared::types::{ContractId, FinancialTermId, PartyId, TargetId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calendar::MonthKey;
use crate::contract::{
    ContractTarget, FinancialTerm, LeaseContract, LeaseKind, LeaseStatus, LeaseTerm, PaymentType,
    RenewalKind, TargetType,
};

use super::generator::{HORIZON_YEARS, LedgerGenerator};
use super::settlement::mark_paid;
use super::types::TransactionStatus;

/// Strategy for whole-currency amounts (0 to 10,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(Decimal::from)
}

/// Strategy for calendar dates in a window the walks can reach.
fn start_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn lease_kind() -> impl Strategy<Value = LeaseKind> {
    prop_oneof![
        Just(LeaseKind::OutboundLease),
        Just(LeaseKind::InboundLease),
        Just(LeaseKind::Sublease),
    ]
}

/// A lease with one financial term spanning its whole bounded range.
fn bounded_lease() -> impl Strategy<Value = LeaseContract> {
    (
        start_date(),
        1u32..=36,
        amount(),
        amount(),
        1u32..=31,
        lease_kind(),
    )
        .prop_map(|(start, months, rent, fee, payment_day, kind)| {
            let end = MonthKey::of(start)
                .first_day()
                .checked_add_months(chrono::Months::new(months))
                .unwrap();
            make_lease(kind, start, Some(end), rent, fee, payment_day)
        })
}

fn make_lease(
    kind: LeaseKind,
    start: NaiveDate,
    end: Option<NaiveDate>,
    rent: Decimal,
    fee: Decimal,
    payment_day: u32,
) -> LeaseContract {
    let term_end = end.unwrap_or_else(|| NaiveDate::from_ymd_opt(2099, 12, 31).unwrap());
    LeaseContract {
        id: ContractId::from_uuid(Uuid::now_v7()),
        kind,
        target: ContractTarget {
            target_type: TargetType::Unit,
            target_id: TargetId::new(),
        },
        counterparty_id: PartyId::new(),
        status: LeaseStatus::Active,
        term: LeaseTerm {
            signed_date: start,
            overall_start: start,
            overall_end: end,
            renewal_kind: RenewalKind::New,
        },
        financial_terms: vec![FinancialTerm {
            id: FinancialTermId::new(),
            start_date: start,
            end_date: term_end,
            deposit: Decimal::ZERO,
            monthly_rent: rent,
            admin_fee: fee,
            payment_day,
            payment_type: PaymentType::Postpaid,
            management_items: vec![],
            late_fee_rate: None,
            note: None,
        }],
        conditions: vec![],
        note: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every generated transaction has a unique (contract, month, charge
    /// type) identity within the run.
    #[test]
    fn prop_generated_ids_are_unique(
        leases in proptest::collection::vec(bounded_lease(), 1..4),
        today in start_date(),
    ) {
        let outcome = LedgerGenerator::generate(&leases, &[], &[], today);

        let mut ids: Vec<_> = outcome.new_transactions.iter().map(|tx| tx.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    /// Feeding a run's merged output back in converges: nothing new,
    /// nothing updated.
    #[test]
    fn prop_regeneration_converges(
        leases in proptest::collection::vec(bounded_lease(), 1..4),
        today in start_date(),
    ) {
        let first = LedgerGenerator::generate(&leases, &[], &[], today);
        let store = first.merge_into(&[]);

        let second = LedgerGenerator::generate(&leases, &[], &store, today);
        prop_assert!(second.is_converged(), "second run produced {} new / {} updated",
            second.new_transactions.len(), second.updated_transactions.len());
    }

    /// An open-ended lease never bills past the forward horizon.
    #[test]
    fn prop_open_ended_walk_respects_horizon(
        start in start_date(),
        rent in 1i64..10_000_000i64,
        today in start_date(),
    ) {
        let lease = make_lease(
            LeaseKind::OutboundLease,
            start,
            None,
            Decimal::from(rent),
            Decimal::ZERO,
            15,
        );
        let outcome = LedgerGenerator::generate(&[lease], &[], &[], today);

        let cap = MonthKey::of(
            today
                .checked_add_months(chrono::Months::new(12 * HORIZON_YEARS))
                .unwrap(),
        );
        prop_assert!(outcome.new_transactions.iter().all(|tx| tx.target_month <= cap));
    }

    /// Once every stored row is paid, regeneration leaves the ledger alone
    /// no matter how the terms or the reference date move.
    #[test]
    fn prop_paid_rows_are_never_updated(
        lease in bounded_lease(),
        today in start_date(),
        later_days in 0u64..800,
        new_rent in 1i64..10_000_000i64,
    ) {
        let first = LedgerGenerator::generate(std::slice::from_ref(&lease), &[], &[], today);
        let store: Vec<_> = first
            .merge_into(&[])
            .iter()
            .map(|tx| mark_paid(tx, today))
            .collect();

        let mut repriced = lease;
        repriced.financial_terms[0].monthly_rent = Decimal::from(new_rent);
        let later = today
            .checked_add_days(chrono::Days::new(later_days))
            .unwrap();

        let second =
            LedgerGenerator::generate(std::slice::from_ref(&repriced), &[], &store, later);
        prop_assert!(second.updated_transactions.is_empty());
        prop_assert!(
            store.iter().all(|tx| tx.status == TransactionStatus::Paid)
        );
    }

    /// Amount sign follows lease direction for every generated charge.
    #[test]
    fn prop_sign_follows_direction(lease in bounded_lease(), today in start_date()) {
        let outcome = LedgerGenerator::generate(std::slice::from_ref(&lease), &[], &[], today);
        let expense = lease.kind == LeaseKind::InboundLease;
        let sign_ok = outcome.new_transactions.iter().all(|tx| {
            if expense {
                tx.amount < Decimal::ZERO
            } else {
                tx.amount > Decimal::ZERO
            }
        });
        prop_assert!(sign_ok);
    }
}
