//! Report routes: period reports, category breakdown, trailing series.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use crate::AppState;
use expenso_core::budget::BudgetSheet;
use expenso_core::ledger::Snapshot;
use expenso_core::period::PeriodKind;
use expenso_core::report::ReportService;
use expenso_shared::types::UserId;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/reports", get(get_reports))
        .route(
            "/users/{user_id}/reports/categories",
            get(get_category_breakdown),
        )
        .route(
            "/users/{user_id}/reports/monthly-series",
            get(get_monthly_series),
        )
}

/// Query parameters carrying an injectable reference date.
#[derive(Debug, Deserialize)]
pub struct AsOfQuery {
    /// Reference date for bucketing; defaults to today.
    pub as_of: Option<NaiveDate>,
}

/// Builds the screening snapshot for a user, logging one warning per
/// excluded row.
fn snapshot_for(state: &AppState, user: UserId) -> Snapshot {
    let snapshot = Snapshot::from_raw(state.store.list_transactions(user));
    for warning in &snapshot.warnings {
        warn!(%user, %warning, "excluding malformed transaction row");
    }
    snapshot
}

/// Returns the three period reports plus derived notifications.
///
/// Screening warnings are surfaced in the payload so a client can show why
/// rows were excluded; they never abort the computation.
async fn get_reports(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> impl IntoResponse {
    let user = UserId::from_uuid(user_id);
    let now = query.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let snapshot = snapshot_for(&state, user);
    let sheet = BudgetSheet::from_entries(&state.store.get_budgets(user));

    let reports = ReportService::compute_reports(&snapshot.transactions, &sheet, now);
    let notifications = ReportService::compute_notifications(&reports, &state.currency_symbol);

    Json(json!({
        "reports": reports,
        "notifications": notifications,
        "warnings": snapshot.warnings,
    }))
}

/// Returns the category breakdown for a proportional chart.
async fn get_category_breakdown(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    let snapshot = snapshot_for(&state, UserId::from_uuid(user_id));
    let slices = ReportService::compute_category_breakdown(&snapshot.transactions);
    Json(json!({ "categories": slices }))
}

/// Returns the six-month trailing series paired with the current monthly
/// limit.
async fn get_monthly_series(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> impl IntoResponse {
    let user = UserId::from_uuid(user_id);
    let now = query.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let snapshot = snapshot_for(&state, user);
    let sheet = BudgetSheet::from_entries(&state.store.get_budgets(user));
    let monthly_limit = sheet.limit(PeriodKind::Monthly);

    let series =
        ReportService::compute_trailing_series(&snapshot.transactions, monthly_limit, now);
    Json(json!({ "series": series }))
}
