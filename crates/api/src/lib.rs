//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for transactions, budgets, and reports
//! - Response types
//!
//! Authentication and session handling are external concerns; user scoping
//! is a `user_id` path segment.

pub mod error;
pub mod routes;

pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use expenso_store::MemoryStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator.
    pub store: Arc<MemoryStore>,
    /// Currency symbol used in notification messages.
    pub currency_symbol: Arc<str>,
}

impl AppState {
    /// Creates state with an empty store.
    #[must_use]
    pub fn new(currency_symbol: &str) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            currency_symbol: Arc::from(currency_symbol),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
