//! Billing error types.

use estia_shared::types::TransactionId;
use thiserror::Error;

/// Errors from the manual settlement entry points.
///
/// The generator itself returns no errors under normal data variance:
/// uncovered months are skipped, out-of-range payment days fall back to the
/// end of the month, and zero charges are simply not billed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// Paid transactions are settled financial history and stay frozen.
    #[error("transaction {0} is paid and cannot be modified")]
    PaidTransactionImmutable(TransactionId),
}
