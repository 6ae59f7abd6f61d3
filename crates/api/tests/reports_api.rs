//! End-to-end tests for the report and budget routes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use expenso_api::{AppState, create_router};
use expenso_core::ledger::RawTransaction;
use expenso_shared::types::{TransactionId, UserId};

fn app() -> (Router, AppState) {
    let state = AppState::new("₹");
    (create_router(state.clone()), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_report_flow_with_notifications() {
    let (app, _) = app();
    let user = Uuid::new_v4();

    // 950 spent today against a weekly limit of 1000: near-limit band.
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/users/{user}/transactions"),
        Some(json!({
            "description": "groceries",
            "amount": "950",
            "category": "Food",
            "date": "2026-08-20"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/users/{user}/budgets/weekly"),
        Some(json!({ "limit": "1000" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/users/{user}/reports?as_of=2026-08-20"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let reports = body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["period"], "weekly");
    assert_eq!(reports[0]["status"]["kind"], "near_limit");
    // Monthly/annual were never configured.
    assert_eq!(reports[1]["status"]["kind"], "no_budget_set");
    assert_eq!(reports[2]["status"]["kind"], "no_budget_set");

    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0]["message"],
        "Weekly budget nearly reached (₹50 left)!"
    );
    assert_eq!(body["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_negative_budget_limit_rejected() {
    let (app, _) = app();
    let user = Uuid::new_v4();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/v1/users/{user}/budgets/monthly"),
        Some(json!({ "limit": "-5" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_unknown_period_rejected() {
    let (app, _) = app();
    let user = Uuid::new_v4();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/users/{user}/budgets/quarterly"),
        Some(json!({ "limit": "100" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reset_check_is_idempotent() {
    let (app, state) = app();
    let user = Uuid::new_v4();

    // A limit stamped before the week's Monday boundary.
    state.store.set_budget(
        UserId::from_uuid(user),
        expenso_core::period::PeriodKind::Weekly,
        dec!(1000),
        chrono::DateTime::parse_from_rfc3339("2026-08-10T09:00:00Z")
            .unwrap()
            .to_utc(),
    );

    // 2026-08-20 is a Thursday; the boundary was Monday the 17th.
    let uri = format!("/api/v1/users/{user}/budgets/reset-check?as_of=2026-08-20");
    let (status, body) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let reset = body["reset"].as_array().unwrap();
    assert!(reset.iter().any(|p| p == "weekly"));

    // Second run inside the same period: nothing left to reset.
    let (_, body) = send(&app, "POST", &uri, None).await;
    assert_eq!(body["reset"].as_array().unwrap().len(), 0);

    // The weekly limit is back to "unset".
    let (_, body) = send(&app, "GET", &format!("/api/v1/users/{user}/budgets"), None).await;
    let budgets = body["budgets"].as_array().unwrap();
    assert_eq!(budgets[0]["period"], "weekly");
    assert_eq!(budgets[0]["limit"], "0");
}

#[tokio::test]
async fn test_malformed_rows_are_surfaced_not_fatal() {
    let (app, state) = app();
    let user = Uuid::new_v4();

    state.store.insert_transaction(
        UserId::from_uuid(user),
        RawTransaction {
            id: TransactionId::new().to_string(),
            description: Some("ok".to_string()),
            amount: Some(dec!(100)),
            category: Some("Food".to_string()),
            occurred_on: Some("2026-08-20".to_string()),
        },
    );
    state.store.insert_transaction(
        UserId::from_uuid(user),
        RawTransaction {
            id: TransactionId::new().to_string(),
            description: Some("broken".to_string()),
            amount: None,
            category: Some("Food".to_string()),
            occurred_on: Some("2026-08-20".to_string()),
        },
    );

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/users/{user}/reports?as_of=2026-08-20"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // One warning, and the valid row still aggregates.
    assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
    assert_eq!(body["warnings"][0]["reason"], "missing_amount");
    assert_eq!(body["reports"][2]["spent"], "100");
}

#[tokio::test]
async fn test_transaction_search_filter() {
    let (app, _) = app();
    let user = Uuid::new_v4();

    for description in ["Morning coffee", "Bus ticket", "Coffee beans"] {
        send(
            &app,
            "POST",
            &format!("/api/v1/users/{user}/transactions"),
            Some(json!({
                "description": description,
                "amount": "10",
                "category": "Others"
            })),
        )
        .await;
    }

    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/v1/users/{user}/transactions?q=coffee"),
        None,
    )
    .await;
    assert_eq!(body["transactions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_edit_and_delete_transaction() {
    let (app, _) = app();
    let user = Uuid::new_v4();

    let (_, body) = send(
        &app,
        "POST",
        &format!("/api/v1/users/{user}/transactions"),
        Some(json!({
            "description": "lunch",
            "amount": "200",
            "category": "Food",
            "date": "2026-08-18"
        })),
    )
    .await;
    let id = body["transaction"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/users/{user}/transactions/{id}"),
        Some(json!({
            "description": "team lunch",
            "amount": "350",
            "category": "UnknownCategory"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/v1/users/{user}/transactions"),
        None,
    )
    .await;
    let row = &body["transactions"][0];
    assert_eq!(row["description"], "team lunch");
    // Unknown categories fall back to Others; the date stays immutable.
    assert_eq!(row["category"], "Others");
    assert_eq!(row["occurred_on"], "2026-08-18");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/users/{user}/transactions/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/users/{user}/transactions/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
