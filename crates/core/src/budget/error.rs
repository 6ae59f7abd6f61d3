//! Budget error types.

use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Limit cannot be negative. Zero means "unset".
    #[error("Budget limit cannot be negative")]
    NegativeLimit,
}
