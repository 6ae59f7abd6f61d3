//! Store error types.

use thiserror::Error;

/// Errors from the persistence collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No transaction with this identifier for this user.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
}
