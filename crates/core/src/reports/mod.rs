//! Portfolio cash summaries.
//!
//! Pure folds over the transaction ledger: income/expense totals,
//! collection progress, and overdue exposure, for the whole ledger or one
//! target month.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::FinancialSummary;
