//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod budgets;
pub mod health;
pub mod reports;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(transactions::routes())
        .merge(budgets::routes())
        .merge(reports::routes())
}
