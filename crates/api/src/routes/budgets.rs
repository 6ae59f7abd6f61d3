//! Budget management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{ApiError, AppState};
use expenso_core::budget::{BudgetService, BudgetSheet, due_resets};
use expenso_core::period::{PeriodKind, UnknownPeriod};
use expenso_shared::AppError;
use expenso_shared::types::UserId;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/budgets", get(get_budgets))
        .route("/users/{user_id}/budgets/{period}", put(set_budget))
        .route("/users/{user_id}/budgets/reset-check", post(reset_check))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for setting a budget limit.
#[derive(Debug, Deserialize)]
pub struct SetBudgetRequest {
    /// Non-negative limit; zero clears the budget.
    pub limit: Decimal,
}

/// One period's budget in the response. Periods never set report zero.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    /// Period kind.
    pub period: PeriodKind,
    /// Configured limit (zero if unset).
    pub limit: Decimal,
}

/// Query parameters carrying an injectable reference date.
#[derive(Debug, Deserialize)]
pub struct AsOfQuery {
    /// Reference date for period boundaries; defaults to today.
    pub as_of: Option<NaiveDate>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Returns all three budget limits, with missing periods as zero.
async fn get_budgets(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    let entries = state.store.get_budgets(UserId::from_uuid(user_id));
    let sheet = BudgetSheet::from_entries(&entries);

    let budgets: Vec<BudgetResponse> = PeriodKind::ALL
        .into_iter()
        .map(|period| BudgetResponse {
            period,
            limit: sheet.limit(period),
        })
        .collect();
    Json(json!({ "budgets": budgets }))
}

/// Sets one period's limit. Overwrites any prior value; negative limits are
/// rejected before they can reach the evaluator.
async fn set_budget(
    State(state): State<AppState>,
    Path((user_id, period)): Path<(Uuid, String)>,
    Json(request): Json<SetBudgetRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let period: PeriodKind = period
        .parse()
        .map_err(|e: UnknownPeriod| AppError::Validation(e.to_string()))?;
    BudgetService::validate_limit(request.limit)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state
        .store
        .set_budget(UserId::from_uuid(user_id), period, request.limit, Utc::now());
    info!(%user_id, %period, limit = %request.limit, "budget set");
    Ok(Json(json!({ "updated": true })))
}

/// Runs the automatic budget reset check.
///
/// Idempotent: slots already set or reset inside the current period are left
/// alone, so repeated calls within one period perform at most one reset each.
async fn reset_check(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> impl IntoResponse {
    let user = UserId::from_uuid(user_id);
    let now = query.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let sheet = BudgetSheet::from_entries(&state.store.get_budgets(user));
    let due = due_resets(&sheet, now);
    // Stamp with the reference date so injected dates stay idempotent too.
    let stamp = now.and_time(chrono::NaiveTime::MIN).and_utc();
    for period in &due {
        state.store.set_budget(user, *period, Decimal::ZERO, stamp);
        info!(%user_id, period = %period, "budget reset for new period");
    }

    Json(json!({ "reset": due }))
}
