//! Core aggregation logic for Expenso.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All computations are deterministic functions of an in-memory
//! snapshot plus an injected reference date; nothing here touches the clock.
//!
//! # Modules
//!
//! - `ledger` - Transactions, categories, and snapshot screening
//! - `period` - Reporting period classification (weekly/monthly/annual)
//! - `budget` - Budget sheet, limit validation, and the periodic reset machine
//! - `report` - Aggregation, budget evaluation, and report assembly

pub mod budget;
pub mod ledger;
pub mod period;
pub mod report;
