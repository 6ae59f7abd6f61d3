//! Budget validation rules.

use rust_decimal::Decimal;

use super::error::BudgetError;

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Validates a limit before it reaches the sheet or the evaluator.
    ///
    /// The evaluator assumes `limit >= 0`; negative input is rejected here,
    /// at the boundary. Zero is valid and means "unset".
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NegativeLimit` if the limit is negative.
    pub fn validate_limit(limit: Decimal) -> Result<(), BudgetError> {
        if limit < Decimal::ZERO {
            return Err(BudgetError::NegativeLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_limit_rejected() {
        assert_eq!(
            BudgetService::validate_limit(dec!(-0.01)),
            Err(BudgetError::NegativeLimit)
        );
    }

    #[test]
    fn test_zero_and_positive_limits_accepted() {
        assert!(BudgetService::validate_limit(Decimal::ZERO).is_ok());
        assert!(BudgetService::validate_limit(dec!(1000)).is_ok());
    }
}
