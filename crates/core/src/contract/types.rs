//! Contract domain types for lease and maintenance billing.

use chrono::NaiveDate;
use estia_shared::types::{ContractId, FinancialTermId, PartyId, TargetId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthKey;

/// Lease direction relative to the portfolio owner.
///
/// Direction decides the sign of generated ledger amounts: leasing out is
/// income, leasing in is expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseKind {
    /// Property leased out to a tenant (income).
    OutboundLease,
    /// Property leased in from a landlord (expense).
    InboundLease,
    /// Leased-in space sublet onward (income).
    Sublease,
}

/// Asset level a contract is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Whole property (site/complex).
    Property,
    /// One building within a property.
    Building,
    /// One unit within a building.
    Unit,
}

/// Reference to the asset a contract covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTarget {
    /// Asset level.
    pub target_type: TargetType,
    /// ID of the property, building, or unit.
    pub target_id: TargetId,
}

/// Lease contract lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaseStatus {
    /// In force.
    Active,
    /// Past its end date.
    Expired,
    /// Ended early.
    Terminated,
    /// Signed but not yet started; bills nothing.
    Pending,
}

/// How the lease term came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewalKind {
    /// First contract with this counterparty.
    New,
    /// Explicit renewal of a prior contract.
    Renewal,
    /// Rolled over without a new signature.
    Implicit,
}

/// Overall bounds of a lease contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseTerm {
    /// Date the contract was signed.
    pub signed_date: NaiveDate,
    /// First day of occupancy.
    pub overall_start: NaiveDate,
    /// Last day of occupancy. `None` for open-ended leases; the billing
    /// generator caps the walk at its forward horizon.
    pub overall_end: Option<NaiveDate>,
    /// Origin of this term.
    pub renewal_kind: RenewalKind,
}

/// Service category bundled into the admin fee. Informational only; the
/// generator never bills items individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ManagementItem {
    Electricity,
    Water,
    Gas,
    Internet,
    Tv,
    Cleaning,
    Elevator,
    Security,
    Parking,
}

/// Payment timing for a financial term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Due at the start of the covered period.
    Prepaid,
    /// Due at the end of the covered period.
    Postpaid,
}

/// A dated sub-period of a lease carrying its own financial figures.
///
/// Supports step-up rent schedules: a lease holds an ordered list of terms,
/// each governing the months its `[start_date, end_date]` range covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTerm {
    /// Unique identifier.
    pub id: FinancialTermId,
    /// First day this term applies (inclusive).
    pub start_date: NaiveDate,
    /// Last day this term applies (inclusive).
    pub end_date: NaiveDate,
    /// Security deposit for the period.
    pub deposit: Decimal,
    /// Monthly rent. May be zero for deposit-only arrangements.
    pub monthly_rent: Decimal,
    /// Monthly admin fee covering the bundled management items.
    pub admin_fee: Decimal,
    /// Day of month payments fall due (1-31, clamped to month length).
    pub payment_day: u32,
    /// Payment timing.
    pub payment_type: PaymentType,
    /// Services bundled into the admin fee.
    pub management_items: Vec<ManagementItem>,
    /// Monthly late-fee rate, when agreed.
    pub late_fee_rate: Option<Decimal>,
    /// Free-form note (e.g. "year-2 5% step-up").
    pub note: Option<String>,
}

impl FinancialTerm {
    /// Returns true if this term's date range overlaps the given month.
    #[must_use]
    pub fn covers(&self, month: MonthKey) -> bool {
        self.start_date <= month.last_day() && self.end_date >= month.first_day()
    }
}

/// A lease contract over a property, building, or unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseContract {
    /// Unique identifier.
    pub id: ContractId,
    /// Lease direction.
    pub kind: LeaseKind,
    /// Asset under contract.
    pub target: ContractTarget,
    /// Tenant (outbound) or landlord (inbound).
    pub counterparty_id: PartyId,
    /// Lifecycle status.
    pub status: LeaseStatus,
    /// Overall contract bounds.
    pub term: LeaseTerm,
    /// Ordered financial terms. An empty list bills nothing.
    pub financial_terms: Vec<FinancialTerm>,
    /// Special conditions, free text.
    pub conditions: Vec<String>,
    /// Free-form note.
    pub note: Option<String>,
}

impl LeaseContract {
    /// Returns true if the monthly walk should bill this contract.
    ///
    /// Pending contracts are skipped. Expired and terminated contracts keep
    /// their historical months billable.
    #[must_use]
    pub fn is_billable(&self) -> bool {
        self.status != LeaseStatus::Pending
    }
}

/// Maintenance service category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ServiceType {
    Cleaning,
    Security,
    Elevator,
    FireSafety,
    Internet,
}

/// Maintenance contract lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    /// In force.
    Active,
    /// Past its end date.
    Expired,
}

/// Bounds of a maintenance contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceTerm {
    /// First day of service.
    pub start_date: NaiveDate,
    /// Last day of service. `None` for rolling contracts; the billing
    /// generator caps the walk at its forward horizon.
    pub end_date: Option<NaiveDate>,
}

/// A recurring maintenance service contract with a vendor.
///
/// Carries exactly one flat monthly cost, no term history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceContract {
    /// Unique identifier.
    pub id: ContractId,
    /// Asset under service.
    pub target: ContractTarget,
    /// Service vendor.
    pub vendor_id: PartyId,
    /// Service category.
    pub service_type: ServiceType,
    /// Lifecycle status.
    pub status: MaintenanceStatus,
    /// Service period.
    pub term: MaintenanceTerm,
    /// Flat monthly cost, billed as an expense.
    pub monthly_cost: Decimal,
    /// Scope description, free text.
    pub details: String,
}

impl MaintenanceContract {
    /// Returns true if the monthly walk should bill this contract.
    ///
    /// Active and expired contracts both bill; expired ones keep their
    /// historical months billable.
    #[must_use]
    pub fn is_billable(&self) -> bool {
        matches!(
            self.status,
            MaintenanceStatus::Active | MaintenanceStatus::Expired
        )
    }
}
