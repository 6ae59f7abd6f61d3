//! Transactions, categories, and snapshot screening.

pub mod snapshot;
pub mod types;

pub use snapshot::{Snapshot, SnapshotWarning};
pub use types::{Category, RawTransaction, Transaction};
