use std::sync::Arc;

use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::Value;

use deskbook_api::{ApiState, app, middleware::auth};
use deskbook_core::holidays::HolidayCalendar;
use deskbook_db::{ledger::Ledger, mock::MockStore};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_reports_ok() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_degrades_after_store_failure() {
    let mut store = MockStore::new();
    store
        .expect_fetch_all()
        .returning(|| Err(eyre::eyre!("connection refused")));
    let state = Arc::new(ApiState::new(
        Ledger::new(store),
        HolidayCalendar::current_year(),
        "@acme.com".to_string(),
        "admin".to_string(),
        auth::hash_password("presence@hq").unwrap(),
    ));
    let server = TestServer::new(app(state)).unwrap();

    // Nothing has touched the store yet.
    server.get("/health").await.assert_status_ok();

    // A request that hits the store fails and marks the connection.
    let list = server.get("/api/bookings").await;
    assert_eq!(list.status_code(), 500);

    let health = server.get("/health").await;
    assert_eq!(health.status_code(), 503);
    let body: Value = health.json();
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_version_endpoint() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/version").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
