//! Aggregation, budget evaluation, and report assembly.
//!
//! This module rolls raw transaction snapshots into the period reports,
//! category breakdown, and trailing series the presentation layer consumes.

pub mod aggregate;
pub mod assemble;
pub mod evaluate;
pub mod types;


pub use assemble::{CHART_PALETTE, ReportService};
pub use types::{
    BudgetStatus, CategorySlice, MonthPoint, Notification, NotificationKind, PeriodReport,
};
