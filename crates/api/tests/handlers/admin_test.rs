use axum::http::{HeaderName, HeaderValue};
use chrono::Local;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{ADMIN_USERNAME, TestContext, next_weekday};

const TOKEN_HEADER: &str = "x-admin-token";

fn token_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(TOKEN_HEADER),
        HeaderValue::from_str(token).unwrap(),
    )
}

async fn seed_booking(ctx: &TestContext, email: &str) {
    let date = next_weekday(Local::now().date_naive());
    ctx.server
        .post("/api/bookings")
        .json(&json!({
            "email": email,
            "date": date,
            "location": "headquarters",
        }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/admin/login")
        .json(&json!({
            "username": ADMIN_USERNAME,
            "password": "nope",
        }))
        .await;
    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Authentication error: Invalid credentials. Only administrators can manage bookings"
    );

    let response = ctx
        .server
        .post("/api/admin/login")
        .json(&json!({
            "username": "root",
            "password": "nope",
        }))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_admin_endpoints_fail_closed_without_session() {
    let ctx = TestContext::new();

    // No token at all.
    let response = ctx.server.post("/api/admin/purge").await;
    assert_eq!(response.status_code(), 403);

    // A token nobody issued.
    let (name, value) = token_header("forged");
    let response = ctx
        .server
        .post("/api/admin/purge")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), 403);

    let response = ctx.server.get("/api/admin/export").await;
    assert_eq!(response.status_code(), 403);

    let response = ctx.server.get("/api/admin/dump").await;
    assert_eq!(response.status_code(), 403);

    let response = ctx.server.post("/api/admin/purge-expired").await;
    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn test_purge_all_removes_everything() {
    let ctx = TestContext::new();
    seed_booking(&ctx, "ana@acme.com").await;
    seed_booking(&ctx, "bruno@acme.com").await;

    let token = ctx.login().await;
    let (name, value) = token_header(&token);
    let response = ctx
        .server
        .post("/api/admin/purge")
        .add_header(name, value)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["removed"], 2);

    let list = ctx.server.get("/api/bookings").await;
    let bookings: Vec<Value> = list.json();
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_purge_expired_keeps_recent_bookings() {
    let ctx = TestContext::new();
    seed_booking(&ctx, "ana@acme.com").await;

    let token = ctx.login().await;
    let (name, value) = token_header(&token);
    let response = ctx
        .server
        .post("/api/admin/purge-expired")
        .add_header(name, value)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    // The seeded booking is today or later, well inside retention.
    assert_eq!(body["removed"], 0);

    let list = ctx.server.get("/api/bookings").await;
    let bookings: Vec<Value> = list.json();
    assert_eq!(bookings.len(), 1);
}

#[tokio::test]
async fn test_export_csv() {
    let ctx = TestContext::new();
    let token = ctx.login().await;

    // Empty collection has nothing to export.
    let (name, value) = token_header(&token);
    let response = ctx
        .server
        .get("/api/admin/export")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), 404);

    seed_booking(&ctx, "ana@acme.com").await;
    let (name, value) = token_header(&token);
    let response = ctx
        .server
        .get("/api/admin/export")
        .add_header(name, value)
        .await;
    response.assert_status_ok();
    let disposition = response.header("content-disposition");
    assert!(
        disposition
            .to_str()
            .unwrap()
            .starts_with("attachment; filename=\"bookings-")
    );
    let body = response.text();
    assert!(body.starts_with("Email,Date,Day,Location"));
    assert!(body.contains("ana@acme.com"));
    assert!(body.contains("Headquarters"));
}

#[tokio::test]
async fn test_dump_carries_retention_verdicts() {
    let ctx = TestContext::new();
    seed_booking(&ctx, "ana@acme.com").await;

    let token = ctx.login().await;
    let (name, value) = token_header(&token);
    let response = ctx
        .server
        .get("/api/admin/dump")
        .add_header(name, value)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    let records = body["records"].as_array().unwrap();
    assert_eq!(records[0]["email"], "ana@acme.com");
    assert_eq!(records[0]["expired"], false);
}

#[tokio::test]
async fn test_logout_ends_the_session() {
    let ctx = TestContext::new();
    let token = ctx.login().await;

    let (name, value) = token_header(&token);
    ctx.server
        .post("/api/admin/logout")
        .add_header(name, value)
        .await
        .assert_status_ok();

    // The token no longer opens anything.
    let (name, value) = token_header(&token);
    let response = ctx
        .server
        .post("/api/admin/purge")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), 403);
}
