//! DashMap-backed per-user store.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use expenso_core::budget::BudgetEntry;
use expenso_core::ledger::{Category, RawTransaction};
use expenso_core::period::PeriodKind;
use expenso_shared::types::UserId;

use crate::error::StoreError;

/// Fields a transaction edit may change. Date and owner are immutable after
/// creation, so they are absent here.
#[derive(Debug, Clone)]
pub struct TransactionPatch {
    /// New description.
    pub description: String,
    /// New amount.
    pub amount: Decimal,
    /// New category.
    pub category: Category,
}

#[derive(Debug, Default)]
struct UserRecords {
    transactions: Vec<RawTransaction>,
    budgets: Vec<BudgetEntry>,
}

/// In-memory, per-user store of transactions and budgets.
///
/// Rows keep the loose wire shape; screening into typed values happens in
/// the core when a snapshot is built.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<UserId, UserRecords>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all of a user's transaction rows.
    #[must_use]
    pub fn list_transactions(&self, user: UserId) -> Vec<RawTransaction> {
        self.users
            .get(&user)
            .map(|records| records.transactions.clone())
            .unwrap_or_default()
    }

    /// Appends a transaction row for a user.
    pub fn insert_transaction(&self, user: UserId, row: RawTransaction) {
        debug!(%user, id = %row.id, "inserting transaction");
        self.users.entry(user).or_default().transactions.push(row);
    }

    /// Edits a transaction's description, amount, and category.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TransactionNotFound` if the user has no row with
    /// this identifier.
    pub fn update_transaction(
        &self,
        user: UserId,
        id: &str,
        patch: &TransactionPatch,
    ) -> Result<(), StoreError> {
        let mut records = self.users.entry(user).or_default();
        let row = records
            .transactions
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| StoreError::TransactionNotFound(id.to_string()))?;

        row.description = Some(patch.description.clone());
        row.amount = Some(patch.amount);
        row.category = Some(patch.category.as_str().to_string());
        debug!(%user, id, "updated transaction");
        Ok(())
    }

    /// Deletes a transaction row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TransactionNotFound` if the user has no row with
    /// this identifier.
    pub fn delete_transaction(&self, user: UserId, id: &str) -> Result<(), StoreError> {
        let mut records = self.users.entry(user).or_default();
        let before = records.transactions.len();
        records.transactions.retain(|row| row.id != id);
        if records.transactions.len() == before {
            return Err(StoreError::TransactionNotFound(id.to_string()));
        }
        debug!(%user, id, "deleted transaction");
        Ok(())
    }

    /// Returns a user's budget entries. Periods never set are omitted.
    #[must_use]
    pub fn get_budgets(&self, user: UserId) -> Vec<BudgetEntry> {
        self.users
            .get(&user)
            .map(|records| records.budgets.clone())
            .unwrap_or_default()
    }

    /// Sets (or overwrites) the budget limit for one period.
    ///
    /// One entry per (user, period): a repeated set replaces the prior value
    /// and refreshes the last-set stamp.
    pub fn set_budget(&self, user: UserId, period: PeriodKind, limit: Decimal, at: DateTime<Utc>) {
        debug!(%user, %period, %limit, "setting budget");
        let mut records = self.users.entry(user).or_default();
        if let Some(entry) = records.budgets.iter_mut().find(|b| b.period == period) {
            entry.limit = limit;
            entry.last_set = Some(at);
        } else {
            records.budgets.push(BudgetEntry {
                period,
                limit,
                last_set: Some(at),
            });
        }
    }
}
