//! Report assembly: composes the period calculator, aggregator, and budget
//! evaluator into the structures the presentation layer consumes.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::budget::BudgetSheet;
use crate::ledger::Transaction;
use crate::period::PeriodKind;

use super::aggregate::{bucket_total, category_totals, percentage_share};
use super::evaluate::{evaluate, notification_for};
use super::types::{CategorySlice, MonthPoint, Notification, PeriodReport};

/// Fixed display palette for the category chart, cycled by slice index.
pub const CHART_PALETTE: [&str; 6] = [
    "#00e676", "#ffd600", "#2979ff", "#ff1744", "#ff9100", "#651fff",
];

/// The trailing series always covers six months anchored at August.
const SERIES_MONTHS: u32 = 6;
const ANCHOR_MONTH: u32 = 8;

/// Service assembling presentation-ready reports.
///
/// Every method is a pure function of (snapshot, budget sheet, reference
/// date) and may be recomputed freely; nothing here mutates shared state.
pub struct ReportService;

impl ReportService {
    /// Produces one report per period kind, in report order.
    ///
    /// Each period is evaluated independently, so an odd budget value for
    /// one period cannot affect the others.
    #[must_use]
    pub fn compute_reports(
        transactions: &[Transaction],
        budgets: &BudgetSheet,
        now: NaiveDate,
    ) -> Vec<PeriodReport> {
        PeriodKind::ALL
            .into_iter()
            .map(|period| {
                let spent = bucket_total(transactions, period, now);
                let limit = budgets.limit(period);
                PeriodReport {
                    period,
                    spent,
                    limit,
                    status: evaluate(spent, limit),
                }
            })
            .collect()
    }

    /// Derives notifications from already-computed period reports.
    #[must_use]
    pub fn compute_notifications(reports: &[PeriodReport], symbol: &str) -> Vec<Notification> {
        reports
            .iter()
            .filter_map(|report| notification_for(report, symbol))
            .collect()
    }

    /// Produces the category breakdown for a proportional chart.
    ///
    /// Bucket-independent: every transaction in the snapshot counts. Colors
    /// cycle through [`CHART_PALETTE`] by slice index.
    #[must_use]
    pub fn compute_category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
        let grouped = category_totals(transactions);
        grouped
            .totals
            .into_iter()
            .enumerate()
            .map(|(idx, (category, amount))| CategorySlice {
                category,
                amount,
                percentage: percentage_share(amount, grouped.grand_total),
                color: CHART_PALETTE[idx % CHART_PALETTE.len()].to_string(),
            })
            .collect()
    }

    /// Produces the six-month trailing series for the dashboard line chart.
    ///
    /// The window starts in August of the current year, or of the prior year
    /// when `now` is before August. The currently configured monthly limit is
    /// repeated for every point; historical limits are not reconstructed.
    #[must_use]
    pub fn compute_trailing_series(
        transactions: &[Transaction],
        monthly_limit: Decimal,
        now: NaiveDate,
    ) -> Vec<MonthPoint> {
        let anchor_year = if now.month() >= ANCHOR_MONTH {
            now.year()
        } else {
            now.year() - 1
        };

        (0..SERIES_MONTHS)
            .filter_map(|offset| {
                let month0 = ANCHOR_MONTH - 1 + offset;
                let year = anchor_year + i32::try_from(month0 / 12).ok()?;
                let month = month0 % 12 + 1;
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                Some(MonthPoint {
                    month: first.format("%b %Y").to_string(),
                    total: month_total(transactions, year, month),
                    limit: monthly_limit,
                })
            })
            .collect()
    }
}

/// Sums transaction amounts for one calendar month.
fn month_total(transactions: &[Transaction], year: i32, month: u32) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.occurred_on.year() == year && t.occurred_on.month() == month)
        .map(|t| t.amount)
        .sum()
}
