//! In-memory persistence collaborator for Expenso.
//!
//! Speaks the same wire shapes a database-backed store would: loosely typed
//! transaction rows and per-period budget entries, scoped per user. The
//! aggregation core treats this crate as an external collaborator and never
//! reads it directly; handlers fetch a snapshot and pass it in.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::{MemoryStore, TransactionPatch};
