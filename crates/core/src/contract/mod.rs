//! Lease and maintenance contract types.
//!
//! - Contract, term, and target domain types
//! - Financial term resolution (which term governs a calendar month)

pub mod terms;
pub mod types;


pub use terms::resolve_term_for_month;
pub use types::{
    ContractTarget, FinancialTerm, LeaseContract, LeaseKind, LeaseStatus, LeaseTerm,
    MaintenanceContract, MaintenanceStatus, MaintenanceTerm, ManagementItem, PaymentType,
    RenewalKind, ServiceType, TargetType,
};
