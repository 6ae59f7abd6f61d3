//! Transaction management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{ApiError, AppState};
use expenso_core::ledger::{Category, RawTransaction};
use expenso_shared::types::{TransactionId, UserId};
use expenso_store::TransactionPatch;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/transactions", get(list_transactions))
        .route("/users/{user_id}/transactions", post(create_transaction))
        .route(
            "/users/{user_id}/transactions/{transaction_id}",
            put(update_transaction),
        )
        .route(
            "/users/{user_id}/transactions/{transaction_id}",
            delete(delete_transaction),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring filter on the description.
    pub q: Option<String>,
}

/// Request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Free-text description.
    pub description: String,
    /// Signed amount.
    pub amount: Decimal,
    /// Category label; unknown labels map to Others.
    pub category: String,
    /// Occurred-on date; defaults to today when omitted.
    pub date: Option<NaiveDate>,
}

/// Request body for editing a transaction. Date and owner are immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    /// New description.
    pub description: String,
    /// New amount.
    pub amount: Decimal,
    /// New category label.
    pub category: String,
}

/// Response for a transaction row.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: String,
    /// Description.
    pub description: String,
    /// Amount, if the row has one.
    pub amount: Option<Decimal>,
    /// Category label.
    pub category: String,
    /// ISO-8601 occurred-on date.
    pub occurred_on: String,
}

impl From<RawTransaction> for TransactionResponse {
    fn from(row: RawTransaction) -> Self {
        Self {
            id: row.id,
            description: row.description.unwrap_or_default(),
            amount: row.amount,
            category: row.category.unwrap_or_default(),
            occurred_on: row.occurred_on.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Lists a user's transactions, optionally filtered by description substring.
async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let mut rows = state.store.list_transactions(UserId::from_uuid(user_id));

    if let Some(needle) = query.q.as_deref().map(str::to_lowercase)
        && !needle.is_empty()
    {
        rows.retain(|row| {
            row.description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
        });
    }

    let transactions: Vec<TransactionResponse> =
        rows.into_iter().map(TransactionResponse::from).collect();
    Json(json!({ "transactions": transactions }))
}

/// Creates a transaction. The date defaults to today and is immutable after
/// creation.
async fn create_transaction(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    let occurred_on = request.date.unwrap_or_else(|| Utc::now().date_naive());
    let row = RawTransaction {
        id: TransactionId::new().to_string(),
        description: Some(request.description),
        amount: Some(request.amount),
        category: Some(Category::parse_lossy(&request.category).as_str().to_string()),
        occurred_on: Some(occurred_on.to_string()),
    };

    let response = TransactionResponse::from(row.clone());
    state
        .store
        .insert_transaction(UserId::from_uuid(user_id), row);
    info!(%user_id, id = %response.id, "transaction created");

    (StatusCode::CREATED, Json(json!({ "transaction": response })))
}

/// Edits a transaction's description, amount, and category.
async fn update_transaction(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(Uuid, String)>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let patch = TransactionPatch {
        description: request.description,
        amount: request.amount,
        category: Category::parse_lossy(&request.category),
    };

    state
        .store
        .update_transaction(UserId::from_uuid(user_id), &transaction_id, &patch)?;
    Ok(Json(json!({ "updated": true })))
}

/// Deletes a transaction.
async fn delete_transaction(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(Uuid, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .store
        .delete_transaction(UserId::from_uuid(user_id), &transaction_id)?;
    Ok(Json(json!({ "deleted": true })))
}
