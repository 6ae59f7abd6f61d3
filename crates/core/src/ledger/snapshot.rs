//! Screening of raw rows into a computation snapshot.
//!
//! The aggregation core never reads global state: every computation receives
//! an explicit [`Snapshot`] built from whatever the persistence collaborator
//! returned. Malformed rows are excluded with a surfaced warning instead of
//! aborting the whole computation.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use expenso_shared::types::TransactionId;

use super::types::{Category, RawTransaction, Transaction};

/// A warning produced while screening raw transaction rows.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SnapshotWarning {
    /// Row had no amount.
    #[error("transaction {id} skipped: missing amount")]
    MissingAmount {
        /// Identifier of the skipped row.
        id: String,
    },
    /// Row date was missing or not an ISO-8601 calendar date.
    #[error("transaction {id} skipped: unparseable date {raw:?}")]
    InvalidDate {
        /// Identifier of the skipped row.
        id: String,
        /// The raw date value, empty if missing.
        raw: String,
    },
    /// Row identifier was not a valid UUID.
    #[error("transaction skipped: invalid identifier {id:?}")]
    InvalidId {
        /// The raw identifier.
        id: String,
    },
}

/// A materialized, consistent view of one user's transactions.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Rows that passed screening.
    pub transactions: Vec<Transaction>,
    /// One warning per excluded row.
    pub warnings: Vec<SnapshotWarning>,
}

impl Snapshot {
    /// Screens raw rows into typed transactions.
    ///
    /// Rows with a missing amount, a missing or unparseable date, or an
    /// invalid identifier are excluded and reported in `warnings`. Unknown
    /// category labels map to [`Category::Others`] and are kept.
    #[must_use]
    pub fn from_raw(rows: Vec<RawTransaction>) -> Self {
        let mut transactions = Vec::with_capacity(rows.len());
        let mut warnings = Vec::new();

        for row in rows {
            let Ok(id) = TransactionId::from_str(&row.id) else {
                warnings.push(SnapshotWarning::InvalidId { id: row.id });
                continue;
            };

            let Some(amount) = row.amount else {
                warnings.push(SnapshotWarning::MissingAmount { id: row.id });
                continue;
            };

            let raw_date = row.occurred_on.unwrap_or_default();
            let Ok(occurred_on) = NaiveDate::from_str(&raw_date) else {
                warnings.push(SnapshotWarning::InvalidDate {
                    id: row.id,
                    raw: raw_date,
                });
                continue;
            };

            transactions.push(Transaction {
                id,
                description: row.description.unwrap_or_default(),
                amount,
                category: Category::parse_lossy(row.category.as_deref().unwrap_or_default()),
                occurred_on,
            });
        }

        Self {
            transactions,
            warnings,
        }
    }
}
