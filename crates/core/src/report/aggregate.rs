//! Transaction aggregation: per-bucket and per-category sums.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::{Category, Transaction};
use crate::period::PeriodKind;

/// Sums transaction amounts over one reporting bucket.
#[must_use]
pub fn bucket_total(transactions: &[Transaction], kind: PeriodKind, now: NaiveDate) -> Decimal {
    transactions
        .iter()
        .filter(|t| kind.contains(now, t.occurred_on))
        .map(|t| t.amount)
        .sum()
}

/// Per-category sums over all transactions, bucket-independent.
#[derive(Debug, Clone, Default)]
pub struct CategoryTotals {
    /// Categories that appear in the input, in display order, with sums.
    pub totals: Vec<(Category, Decimal)>,
    /// Sum over all transactions.
    pub grand_total: Decimal,
}

/// Groups transaction amounts by category.
///
/// Only categories that actually appear are included, ordered by
/// [`Category::ALL`] so output is deterministic.
#[must_use]
pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut sums = [Decimal::ZERO; Category::ALL.len()];
    let mut seen = [false; Category::ALL.len()];
    let mut grand_total = Decimal::ZERO;

    for t in transactions {
        let idx = Category::ALL
            .iter()
            .position(|c| *c == t.category)
            .unwrap_or(Category::ALL.len() - 1);
        sums[idx] += t.amount;
        seen[idx] = true;
        grand_total += t.amount;
    }

    let totals = Category::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| seen[*i])
        .map(|(i, c)| (c, sums[i]))
        .collect();

    CategoryTotals {
        totals,
        grand_total,
    }
}

/// Whole-number percentage share of `amount` in `grand_total`.
///
/// Defined as zero when the grand total is zero; never an error.
#[must_use]
pub fn percentage_share(amount: Decimal, grand_total: Decimal) -> Decimal {
    if grand_total.is_zero() {
        Decimal::ZERO
    } else {
        (amount / grand_total * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}
