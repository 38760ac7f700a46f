//! Shared helpers for handler tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::services::{MockShiftsService, MockSongsService, MockStatisticsService};

use super::{AppState, create_router};

/// Mocked services; set expectations, then build a router from them.
#[derive(Default)]
pub(crate) struct TestServices {
    pub(crate) shifts: MockShiftsService,
    pub(crate) songs: MockSongsService,
    pub(crate) statistics: MockStatisticsService,
}

impl TestServices {
    pub(crate) fn router(self) -> Router {
        create_router(AppState::new(
            Arc::new(self.shifts),
            Arc::new(self.songs),
            Arc::new(self.statistics),
        ))
    }
}

/// Sends one request and returns the status with the JSON body
/// (`Value::Null` when the body is empty).
pub(crate) async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("Content-Type", "application/json");
    }

    let response = router
        .oneshot(
            request
                .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
