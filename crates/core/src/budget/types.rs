//! Budget data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::PeriodKind;

/// A budget limit as the persistence collaborator reports it.
///
/// Periods never set may simply be omitted; a missing entry means a zero
/// ("unset") limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Which period the limit applies to.
    pub period: PeriodKind,
    /// Non-negative limit; zero means "unset".
    pub limit: Decimal,
    /// When the limit was last set or reset.
    #[serde(default)]
    pub last_set: Option<DateTime<Utc>>,
}

/// One budget slot: the configured limit plus its last-set stamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetSlot {
    /// Non-negative limit; zero means "unset".
    pub limit: Decimal,
    /// When the limit was last set or reset, if ever.
    pub last_set: Option<DateTime<Utc>>,
}

/// One budget limit per period kind.
///
/// There is exactly one slot per (owner, period); setting a limit overwrites
/// the prior value, it never creates a second entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetSheet {
    weekly: BudgetSlot,
    monthly: BudgetSlot,
    annual: BudgetSlot,
}

impl BudgetSheet {
    /// Builds a sheet from collaborator entries, treating missing periods as
    /// unset. A later duplicate entry overwrites an earlier one.
    #[must_use]
    pub fn from_entries(entries: &[BudgetEntry]) -> Self {
        let mut sheet = Self::default();
        for entry in entries {
            *sheet.slot_mut(entry.period) = BudgetSlot {
                limit: entry.limit,
                last_set: entry.last_set,
            };
        }
        sheet
    }

    /// Returns the slot for a period.
    #[must_use]
    pub const fn slot(&self, kind: PeriodKind) -> &BudgetSlot {
        match kind {
            PeriodKind::Weekly => &self.weekly,
            PeriodKind::Monthly => &self.monthly,
            PeriodKind::Annual => &self.annual,
        }
    }

    /// Returns the configured limit for a period (zero if unset).
    #[must_use]
    pub const fn limit(&self, kind: PeriodKind) -> Decimal {
        self.slot(kind).limit
    }

    /// Overwrites the limit for a period, stamping when it was set.
    pub fn set(&mut self, kind: PeriodKind, limit: Decimal, at: DateTime<Utc>) {
        *self.slot_mut(kind) = BudgetSlot {
            limit,
            last_set: Some(at),
        };
    }

    fn slot_mut(&mut self, kind: PeriodKind) -> &mut BudgetSlot {
        match kind {
            PeriodKind::Weekly => &mut self.weekly,
            PeriodKind::Monthly => &mut self.monthly,
            PeriodKind::Annual => &mut self.annual,
        }
    }
}
