//! Transaction and category types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use expenso_shared::types::TransactionId;

/// Expense category. Closed enumeration shared by all components.
///
/// Serialized with the display names the original data carries
/// (`"Food"`, `"Transport"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Food and groceries.
    Food,
    /// Education expenses.
    Education,
    /// Clothing.
    Clothes,
    /// Transport and travel.
    Transport,
    /// Entertainment.
    Entertainment,
    /// Health and medical.
    Health,
    /// Property and housing.
    Property,
    /// Everything else, including unrecognized categories.
    Others,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 8] = [
        Self::Food,
        Self::Education,
        Self::Clothes,
        Self::Transport,
        Self::Entertainment,
        Self::Health,
        Self::Property,
        Self::Others,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Education => "Education",
            Self::Clothes => "Clothes",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Property => "Property",
            Self::Others => "Others",
        }
    }

    /// Parses a category label, mapping unknown values to `Others`.
    ///
    /// Unknown categories are never rejected; the fallback keeps old rows
    /// countable after the category set changes.
    #[must_use]
    pub fn parse_lossy(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Self::Others)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated transaction, immutable for the duration of a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Free-text description.
    pub description: String,
    /// Signed amount, at least 2 decimal places preserved.
    pub amount: Decimal,
    /// Expense category.
    pub category: Category,
    /// Calendar date the transaction occurred on.
    pub occurred_on: NaiveDate,
}

/// The wire shape a persistence collaborator hands us.
///
/// Loosely typed on purpose: rows may arrive with fields missing or
/// malformed, and screening (not deserialization) decides what to do
/// with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    /// String identifier.
    pub id: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Amount, possibly missing.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Category label, possibly unknown.
    #[serde(default)]
    pub category: Option<String>,
    /// ISO-8601 calendar date.
    #[serde(default)]
    pub occurred_on: Option<String>,
}
