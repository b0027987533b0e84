//! Core business logic for Estia.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `calendar` - Month bucketing, due-date clamping, month iteration
//! - `contract` - Lease and maintenance contract types, financial term resolution
//! - `billing` - Recurring ledger generation and reconciliation
//! - `reports` - Portfolio cash summaries

pub mod billing;
pub mod calendar;
pub mod contract;
pub mod reports;
