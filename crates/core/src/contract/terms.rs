//! Financial term resolution.

use crate::calendar::MonthKey;

use super::types::FinancialTerm;

/// Selects the financial term governing a calendar month.
///
/// A term governs a month when its `[start_date, end_date]` range overlaps
/// the month's `[first_day, last_day]`. When several terms overlap the same
/// month, the first match in stored order wins; contract entry is expected
/// to keep term ranges disjoint, and nothing here validates that.
///
/// Returns `None` when no term covers the month: the contract bills nothing
/// for that month.
#[must_use]
pub fn resolve_term_for_month(terms: &[FinancialTerm], month: MonthKey) -> Option<&FinancialTerm> {
    terms.iter().find(|term| term.covers(month))
}
