//! Reporting period classification.
//!
//! All date-window math lives here so it is testable in isolation from
//! wall-clock time: the reference date is always an injected parameter.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One of the three reporting periods a transaction may be counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Trailing 7-day window ending at the reference date.
    Weekly,
    /// The reference date's calendar month.
    Monthly,
    /// The reference date's calendar year.
    Annual,
}

impl PeriodKind {
    /// All period kinds, in report order.
    pub const ALL: [Self; 3] = [Self::Weekly, Self::Monthly, Self::Annual];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }

    /// Returns true if `date` falls inside this period relative to `now`.
    ///
    /// The weekly window is rolling, not calendar-aligned: both the lower
    /// bound (`now - 7 days`) and `now` itself are inclusive.
    #[must_use]
    pub fn contains(self, now: NaiveDate, date: NaiveDate) -> bool {
        match self {
            Self::Weekly => date >= now - Duration::days(7) && date <= now,
            Self::Monthly => date.month() == now.month() && date.year() == now.year(),
            Self::Annual => date.year() == now.year(),
        }
    }

    /// Returns the first day of the period `now` falls in.
    ///
    /// Weekly periods are calendar weeks starting Monday; this anchors the
    /// budget reset machine, not the rolling report window.
    #[must_use]
    pub fn current_start(self, now: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => now - Duration::days(i64::from(now.weekday().num_days_from_monday())),
            Self::Monthly => now.with_day(1).unwrap_or(now),
            Self::Annual => NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap_or(now),
        }
    }
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PeriodKind {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPeriod(s.to_string()))
    }
}

/// Error for a period label that is not weekly, monthly, or annual.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown period: {0:?}")]
pub struct UnknownPeriod(pub String);

/// Returns every period `date` belongs to relative to `now`.
///
/// A transaction may belong to zero, one, two, or all three periods.
#[must_use]
pub fn buckets_for(now: NaiveDate, date: NaiveDate) -> Vec<PeriodKind> {
    PeriodKind::ALL
        .into_iter()
        .filter(|kind| kind.contains(now, date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_recent_transaction_is_in_all_three_buckets() {
        let now = date(2026, 8, 20);
        let buckets = buckets_for(now, date(2026, 8, 17));
        assert_eq!(
            buckets,
            vec![PeriodKind::Weekly, PeriodKind::Monthly, PeriodKind::Annual]
        );
    }

    #[test]
    fn test_last_year_transaction_is_in_no_bucket() {
        let now = date(2026, 8, 20);
        assert!(buckets_for(now, date(2025, 8, 20)).is_empty());
    }

    #[rstest]
    #[case::lower_bound_inclusive(date(2026, 8, 13), true)]
    #[case::just_outside(date(2026, 8, 12), false)]
    #[case::today_inclusive(date(2026, 8, 20), true)]
    #[case::future(date(2026, 8, 21), false)]
    fn test_weekly_window_bounds(#[case] tx_date: NaiveDate, #[case] expected: bool) {
        let now = date(2026, 8, 20);
        assert_eq!(PeriodKind::Weekly.contains(now, tx_date), expected);
    }

    #[test]
    fn test_weekly_window_crosses_month_boundary() {
        let now = date(2026, 9, 2);
        let tx = date(2026, 8, 29);
        assert!(PeriodKind::Weekly.contains(now, tx));
        assert!(!PeriodKind::Monthly.contains(now, tx));
        assert!(PeriodKind::Annual.contains(now, tx));
    }

    #[test]
    fn test_monthly_requires_same_year() {
        let now = date(2026, 8, 20);
        assert!(!PeriodKind::Monthly.contains(now, date(2025, 8, 20)));
    }

    #[rstest]
    // 2026-08-20 is a Thursday; the week started Monday the 17th.
    #[case(PeriodKind::Weekly, date(2026, 8, 17))]
    #[case(PeriodKind::Monthly, date(2026, 8, 1))]
    #[case(PeriodKind::Annual, date(2026, 1, 1))]
    fn test_current_start(#[case] kind: PeriodKind, #[case] expected: NaiveDate) {
        assert_eq!(kind.current_start(date(2026, 8, 20)), expected);
    }

    #[test]
    fn test_current_start_on_monday_is_identity() {
        let monday = date(2026, 8, 17);
        assert_eq!(PeriodKind::Weekly.current_start(monday), monday);
    }
}
