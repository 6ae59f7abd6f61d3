//! Budget sheet, limit validation, and the periodic reset machine.

pub mod error;
pub mod reset;
pub mod service;
pub mod types;


pub use error::BudgetError;
pub use reset::{ResetState, due_resets, reset_state};
pub use service::BudgetService;
pub use types::{BudgetEntry, BudgetSheet, BudgetSlot};
