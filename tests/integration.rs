//! End-to-end tests for the Memorizer API over an in-memory SQLite database.
//!
//! This test suite covers:
//! - Shift pricing (weekday, Friday/Saturday, January holiday window)
//! - Song pricing
//! - Listing and deleting records
//! - Earnings and payout
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use memorizer::api::{AppState, create_router};
use memorizer::store::Db;

// =============================================================================
// Test Helpers
// =============================================================================

async fn create_router_for_test() -> Router {
    let db = Db::in_memory().await.expect("Failed to open database");
    db.migrate().await.expect("Failed to migrate database");
    create_router(AppState::from_db(db))
}

async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("Content-Type", "application/json");
    }

    let response = router
        .clone()
        .oneshot(
            request
                .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn create_shift(router: &Router, date: &str) -> Value {
    let (status, body) = call(
        router,
        "POST",
        "/api/shifts",
        Some(json!({
            "workerName": "Me",
            "date": date,
            "startTime": "00:00:00",
            "endTime": "23:59:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create shift failed: {}", body);
    body
}

async fn create_song(router: &Router, body: Value) -> Value {
    let (status, body) = call(router, "POST", "/api/songs", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "create song failed: {}", body);
    body
}

async fn earnings(router: &Router) -> (i64, i64) {
    let (status, body) = call(router, "GET", "/api/stats/earnings", None).await;
    assert_eq!(status, StatusCode::OK);
    (
        body["lifetimeEarnings"].as_i64().unwrap(),
        body["currentBalance"].as_i64().unwrap(),
    )
}

// =============================================================================
// Shift pricing
// =============================================================================

#[tokio::test]
async fn test_monday_shift_costs_3000() {
    let router = create_router_for_test().await;

    let shift = create_shift(&router, "2025-01-20").await;

    assert_eq!(shift["cost"], 3000);
    assert_eq!(shift["paid"], false);
    assert_eq!(shift["workerName"], "Me");
    assert_eq!(shift["date"], "2025-01-20");
    assert!(shift["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_friday_shift_costs_4000() {
    let router = create_router_for_test().await;

    assert_eq!(create_shift(&router, "2025-01-17").await["cost"], 4000);
}

#[tokio::test]
async fn test_saturday_shift_costs_4000() {
    let router = create_router_for_test().await;

    assert_eq!(create_shift(&router, "2025-03-15").await["cost"], 4000);
}

#[tokio::test]
async fn test_holiday_friday_shift_costs_3000() {
    let router = create_router_for_test().await;

    // 2025-01-10 is a Friday inside the 1-12 January window
    assert_eq!(create_shift(&router, "2025-01-10").await["cost"], 3000);
}

#[tokio::test]
async fn test_client_supplied_shift_cost_and_paid_are_ignored() {
    let router = create_router_for_test().await;

    let (status, shift) = call(
        &router,
        "POST",
        "/api/shifts",
        Some(json!({ "id": 500, "date": "2025-01-20", "cost": 1, "paid": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(shift["id"], 1);
    assert_eq!(shift["cost"], 3000);
    assert_eq!(shift["paid"], false);
}

#[tokio::test]
async fn test_shift_without_date_is_rejected() {
    let router = create_router_for_test().await;

    let (status, body) = call(
        &router,
        "POST",
        "/api/shifts",
        Some(json!({ "workerName": "Me" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, shifts) = call(&router, "GET", "/api/shifts", None).await;
    assert_eq!(shifts, json!([]));
}

// =============================================================================
// Song pricing
// =============================================================================

#[tokio::test]
async fn test_song_cost_is_always_1000() {
    let router = create_router_for_test().await;

    let without_cost = create_song(
        &router,
        json!({ "title": "Song", "artist": "Out of queue", "addedBy": "Guest" }),
    )
    .await;
    let with_wrong_cost = create_song(&router, json!({ "title": "Other", "cost": 5000 })).await;

    assert_eq!(without_cost["cost"], 1000);
    assert_eq!(without_cost["paid"], false);
    assert_eq!(without_cost["addedBy"], "Guest");
    assert_eq!(with_wrong_cost["cost"], 1000);
}

// =============================================================================
// Listing and deleting
// =============================================================================

#[tokio::test]
async fn test_list_returns_records_in_creation_order() {
    let router = create_router_for_test().await;

    create_shift(&router, "2025-01-20").await;
    create_shift(&router, "2025-01-17").await;

    let (status, shifts) = call(&router, "GET", "/api/shifts", None).await;

    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = shifts
        .as_array()
        .unwrap()
        .iter()
        .map(|shift| shift["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-01-20", "2025-01-17"]);
}

#[tokio::test]
async fn test_delete_removes_only_that_record() {
    let router = create_router_for_test().await;

    let first = create_song(&router, json!({ "title": "First" })).await;
    create_song(&router, json!({ "title": "Second" })).await;

    let (status, body) = call(
        &router,
        "DELETE",
        &format!("/api/songs/{}", first["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (_, songs) = call(&router, "GET", "/api/songs", None).await;
    assert_eq!(songs.as_array().unwrap().len(), 1);
    assert_eq!(songs[0]["title"], "Second");
}

#[tokio::test]
async fn test_delete_nonexistent_id_succeeds_without_side_effects() {
    let router = create_router_for_test().await;

    create_shift(&router, "2025-01-20").await;

    let (status, _) = call(&router, "DELETE", "/api/shifts/999", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&router, "DELETE", "/api/songs/999", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, shifts) = call(&router, "GET", "/api/shifts", None).await;
    assert_eq!(shifts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_shift_and_song_ids_are_independent() {
    let router = create_router_for_test().await;

    let shift = create_shift(&router, "2025-01-20").await;
    let song = create_song(&router, json!({ "title": "Song" })).await;

    assert_eq!(shift["id"], 1);
    assert_eq!(song["id"], 1);
}

// =============================================================================
// Earnings and payout
// =============================================================================

#[tokio::test]
async fn test_empty_ledger_reports_zero_earnings() {
    let router = create_router_for_test().await;

    let (status, body) = call(&router, "GET", "/api/stats/earnings", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "lifetimeEarnings": 0, "currentBalance": 0 }));
}

#[tokio::test]
async fn test_payout_zeroes_balance_and_keeps_lifetime() {
    let router = create_router_for_test().await;

    create_shift(&router, "2025-01-20").await;
    create_song(&router, json!({ "title": "Song", "artist": "Out of queue", "addedBy": "Guest" })).await;

    assert_eq!(earnings(&router).await, (4000, 4000));

    let (status, body) = call(&router, "POST", "/api/stats/payout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    assert_eq!(earnings(&router).await, (4000, 0));

    let (_, shifts) = call(&router, "GET", "/api/shifts", None).await;
    let (_, songs) = call(&router, "GET", "/api/songs", None).await;
    assert_eq!(shifts[0]["paid"], true);
    assert_eq!(songs[0]["paid"], true);
}

#[tokio::test]
async fn test_new_records_after_payout_form_new_balance() {
    let router = create_router_for_test().await;

    create_shift(&router, "2025-01-17").await;
    call(&router, "POST", "/api/stats/payout", None).await;

    create_shift(&router, "2025-01-20").await;
    assert_eq!(earnings(&router).await, (7000, 3000));

    // A repeated payout settles only what is still unpaid
    call(&router, "POST", "/api/stats/payout", None).await;
    call(&router, "POST", "/api/stats/payout", None).await;
    assert_eq!(earnings(&router).await, (7000, 0));
}

#[tokio::test]
async fn test_healthcheck_reports_ok() {
    let router = create_router_for_test().await;

    let (status, body) = call(&router, "GET", "/healthcheck", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
