//! Report data types. All of these are derived values, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::Category;
use crate::period::PeriodKind;

/// Budget status for one period. Exactly one applies per report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No limit was ever configured for this period (limit is zero).
    NoBudgetSet,
    /// Spending went over the limit.
    Exceeded {
        /// Amount by which spending exceeds the limit.
        overage: Decimal,
    },
    /// Spending matches the limit exactly.
    Utilized,
    /// Remaining headroom is within 10% of the limit (inclusive).
    NearLimit {
        /// Amount left before the limit is reached.
        remaining: Decimal,
    },
    /// Spending is comfortably under the limit.
    WithinBudget,
}

/// Aggregated report for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// The period this report covers.
    pub period: PeriodKind,
    /// Total spent in the period.
    pub spent: Decimal,
    /// Configured limit (zero if unset).
    pub limit: Decimal,
    /// Derived status.
    pub status: BudgetStatus,
}

/// Notification severity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Budget exceeded.
    Over,
    /// Budget utilised exactly.
    Utilised,
    /// Budget nearly reached.
    Nearly,
}

/// A derived notification for one period's budget state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity kind.
    pub kind: NotificationKind,
    /// The period the notification refers to.
    pub period: PeriodKind,
    /// Human-readable message with amounts rounded to whole units.
    pub message: String,
}

/// One slice of the category breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlice {
    /// Category label.
    pub category: Category,
    /// Summed amount for the category.
    pub amount: Decimal,
    /// Whole-number percentage share of the grand total (0 when the grand
    /// total is zero).
    pub percentage: Decimal,
    /// Display color from the fixed palette, cycled by index.
    pub color: String,
}

/// One point of the trailing monthly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPoint {
    /// Month label, e.g. "Aug 2026".
    pub month: String,
    /// Transaction total for that calendar month.
    pub total: Decimal,
    /// The currently configured monthly limit (repeated across all points).
    pub limit: Decimal,
}
