//! Budget evaluation: total vs. limit, status and notification derivation.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{BudgetStatus, Notification, NotificationKind, PeriodReport};

/// Compares a bucket's total against its limit and returns exactly one
/// status.
///
/// Precedence: no-budget, exceeded, utilized, near-limit, within. The
/// near-limit band is `0 < limit - total <= limit * 0.10`, upper bound
/// inclusive. Assumes `limit >= 0`; negative limits are rejected upstream.
#[must_use]
pub fn evaluate(total: Decimal, limit: Decimal) -> BudgetStatus {
    if limit.is_zero() {
        return BudgetStatus::NoBudgetSet;
    }
    if total > limit {
        return BudgetStatus::Exceeded {
            overage: total - limit,
        };
    }
    if total == limit {
        return BudgetStatus::Utilized;
    }
    let remaining = limit - total;
    if remaining <= limit * NEAR_LIMIT_FRACTION {
        return BudgetStatus::NearLimit { remaining };
    }
    BudgetStatus::WithinBudget
}

/// 10% of the limit counts as "nearly reached".
const NEAR_LIMIT_FRACTION: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Derives the notification for one period report, if any.
///
/// Comparisons use full precision; only the displayed amounts are rounded to
/// whole currency units. `symbol` is the currency prefix (e.g. "₹").
#[must_use]
pub fn notification_for(report: &PeriodReport, symbol: &str) -> Option<Notification> {
    let period = report.period;
    match report.status {
        BudgetStatus::NoBudgetSet | BudgetStatus::WithinBudget => None,
        BudgetStatus::Exceeded { overage } => Some(Notification {
            kind: NotificationKind::Over,
            period,
            message: format!(
                "{period} budget exceeded by {symbol}{}!",
                round_whole(overage)
            ),
        }),
        BudgetStatus::Utilized => Some(Notification {
            kind: NotificationKind::Utilised,
            period,
            message: format!("{period} budget utilised!"),
        }),
        BudgetStatus::NearLimit { remaining } => Some(Notification {
            kind: NotificationKind::Nearly,
            period,
            message: format!(
                "{period} budget nearly reached ({symbol}{} left)!",
                round_whole(remaining)
            ),
        }),
    }
}

/// Rounds to the nearest whole currency unit, halves away from zero.
fn round_whole(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::PeriodKind;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_near_limit_fraction_is_ten_percent() {
        assert_eq!(NEAR_LIMIT_FRACTION, dec!(0.10));
    }

    #[rstest]
    #[case::no_budget(dec!(500), dec!(0), BudgetStatus::NoBudgetSet)]
    #[case::no_budget_zero_spend(dec!(0), dec!(0), BudgetStatus::NoBudgetSet)]
    #[case::exceeded(dec!(1200), dec!(1000), BudgetStatus::Exceeded { overage: dec!(200) })]
    #[case::utilized(dec!(1000), dec!(1000), BudgetStatus::Utilized)]
    #[case::near_limit(dec!(950), dec!(1000), BudgetStatus::NearLimit { remaining: dec!(50) })]
    #[case::near_limit_boundary(dec!(900), dec!(1000), BudgetStatus::NearLimit { remaining: dec!(100) })]
    #[case::within(dec!(500), dec!(1000), BudgetStatus::WithinBudget)]
    #[case::within_just_outside_band(dec!(899.99), dec!(1000), BudgetStatus::WithinBudget)]
    fn test_evaluate(#[case] total: Decimal, #[case] limit: Decimal, #[case] expected: BudgetStatus) {
        assert_eq!(evaluate(total, limit), expected);
    }

    #[test]
    fn test_exact_limit_is_utilized_not_exceeded_or_near() {
        assert_eq!(evaluate(dec!(1000), dec!(1000)), BudgetStatus::Utilized);
    }

    fn report(status: BudgetStatus) -> PeriodReport {
        PeriodReport {
            period: PeriodKind::Weekly,
            spent: Decimal::ZERO,
            limit: Decimal::ZERO,
            status,
        }
    }

    #[test]
    fn test_quiet_statuses_produce_no_notification() {
        assert!(notification_for(&report(BudgetStatus::NoBudgetSet), "₹").is_none());
        assert!(notification_for(&report(BudgetStatus::WithinBudget), "₹").is_none());
    }

    #[test]
    fn test_exceeded_notification_message() {
        let n =
            notification_for(&report(BudgetStatus::Exceeded { overage: dec!(200) }), "₹").unwrap();
        assert_eq!(n.kind, NotificationKind::Over);
        assert_eq!(n.message, "Weekly budget exceeded by ₹200!");
    }

    #[test]
    fn test_near_limit_notification_rounds_display_only() {
        let n = notification_for(
            &report(BudgetStatus::NearLimit {
                remaining: dec!(49.50),
            }),
            "₹",
        )
        .unwrap();
        assert_eq!(n.kind, NotificationKind::Nearly);
        assert_eq!(n.message, "Weekly budget nearly reached (₹50 left)!");
    }

    #[test]
    fn test_utilised_notification_message() {
        let n = notification_for(&report(BudgetStatus::Utilized), "$").unwrap();
        assert_eq!(n.kind, NotificationKind::Utilised);
        assert_eq!(n.message, "Weekly budget utilised!");
    }
}
