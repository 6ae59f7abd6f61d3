//! Automatic budget reset state machine.
//!
//! Limits roll back to zero ("unset") at each period boundary - Monday for
//! weekly, the 1st for monthly, Jan 1 for annual - unless the user already
//! re-set them inside the new period. The last-set stamp makes the check
//! idempotent: within one period at most one reset happens, no matter how
//! often the check runs.

use chrono::{DateTime, NaiveDate, Utc};

use crate::period::PeriodKind;

use super::types::BudgetSheet;

/// Whether a budget slot still reflects the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetState {
    /// A new period has started since the slot was last set.
    NeedsReset,
    /// The slot was set (or reset) inside the current period.
    UpToDate,
}

/// Classifies one slot's last-set stamp against the current period boundary.
///
/// A slot that was never set at all also needs a reset; recording the stamp
/// then prevents re-running the reset every check.
#[must_use]
pub fn reset_state(kind: PeriodKind, last_set: Option<DateTime<Utc>>, now: NaiveDate) -> ResetState {
    let boundary = kind.current_start(now);
    match last_set {
        Some(stamp) if stamp.date_naive() >= boundary => ResetState::UpToDate,
        _ => ResetState::NeedsReset,
    }
}

/// Returns the period kinds whose slots need a reset, in report order.
///
/// The caller performs the actual resets (zero the limit, stamp `last_set`)
/// through the persistence collaborator.
#[must_use]
pub fn due_resets(sheet: &BudgetSheet, now: NaiveDate) -> Vec<PeriodKind> {
    PeriodKind::ALL
        .into_iter()
        .filter(|kind| reset_state(*kind, sheet.slot(*kind).last_set, now) == ResetState::NeedsReset)
        .collect()
}
