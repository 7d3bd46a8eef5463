use chrono::{Duration, Local};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, next_saturday, next_weekday};

#[tokio::test]
async fn test_create_and_list_booking() {
    let ctx = TestContext::new();
    let date = next_weekday(Local::now().date_naive());

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": date,
            "location": "headquarters",
        }))
        .await;
    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["email"], "ana@acme.com");
    assert_eq!(created["location"], "headquarters");
    assert!(created["day_of_week"].as_str().unwrap().len() >= 6);

    let list = ctx.server.get("/api/bookings").await;
    list.assert_status_ok();
    let bookings: Vec<Value> = list.json();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_create_rejects_foreign_email_domain() {
    let ctx = TestContext::new();
    let date = next_weekday(Local::now().date_naive());

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@gmail.com",
            "date": date,
            "location": "remote",
        }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: Email must end with @acme.com");

    // Bare domain with no local part is not an address.
    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "@acme.com",
            "date": date,
            "location": "remote",
        }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_rejects_empty_email() {
    let ctx = TestContext::new();
    let date = next_weekday(Local::now().date_naive());

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "   ",
            "date": date,
            "location": "annex",
        }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: Email is required");
}

#[tokio::test]
async fn test_create_rejects_ineligible_dates() {
    let ctx = TestContext::new();
    let today = Local::now().date_naive();

    let past = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": today - Duration::days(7),
            "location": "headquarters",
        }))
        .await;
    assert_eq!(past.status_code(), 422);
    let body: Value = past.json();
    assert_eq!(body["error"], "Past dates are not available for booking");

    let weekend = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": next_saturday(today),
            "location": "headquarters",
        }))
        .await;
    assert_eq!(weekend.status_code(), 422);
    let body: Value = weekend.json();
    assert_eq!(body["error"], "Weekends are not available for booking");

    let far = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": today + Duration::days(60),
            "location": "headquarters",
        }))
        .await;
    assert_eq!(far.status_code(), 422);
    let body: Value = far.json();
    assert_eq!(
        body["error"],
        "Dates more than 30 days ahead are not available for booking"
    );

    // Nothing reached the store.
    let list = ctx.server.get("/api/bookings").await;
    let bookings: Vec<Value> = list.json();
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_create_rejects_holiday() {
    let today = Local::now().date_naive();
    let holiday = next_weekday(today);
    let ctx = TestContext::with_holidays(vec![holiday]);

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": holiday,
            "location": "headquarters",
        }))
        .await;
    assert_eq!(response.status_code(), 422);
    let body: Value = response.json();
    assert_eq!(body["error"], "Holidays are not available for booking");
}

#[tokio::test]
async fn test_duplicate_same_person_same_day_conflicts() {
    let ctx = TestContext::new();
    let date = next_weekday(Local::now().date_naive());

    let first = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": date,
            "location": "headquarters",
        }))
        .await;
    first.assert_status_ok();

    // A different location is still the same person on the same day.
    let second = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": date,
            "location": "remote",
        }))
        .await;
    assert_eq!(second.status_code(), 409);
    let body: Value = second.json();
    assert_eq!(
        body["error"],
        format!("A booking for ana@acme.com on {} already exists", date)
    );

    // A colleague on the same day is fine.
    let other = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "bruno@acme.com",
            "date": date,
            "location": "headquarters",
        }))
        .await;
    other.assert_status_ok();
}

#[tokio::test]
async fn test_delete_booking() {
    let ctx = TestContext::new();
    let date = next_weekday(Local::now().date_naive());

    let created: Value = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": date,
            "location": "annex",
        }))
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_string();

    let deleted = ctx.server.delete(&format!("/api/bookings/{}", id)).await;
    deleted.assert_status_ok();

    let list = ctx.server.get("/api/bookings").await;
    let bookings: Vec<Value> = list.json();
    assert!(bookings.is_empty());

    // The id is gone now.
    let again = ctx.server.delete(&format!("/api/bookings/{}", id)).await;
    assert_eq!(again.status_code(), 404);
}

#[tokio::test]
async fn test_unknown_location_is_rejected() {
    let ctx = TestContext::new();
    let date = next_weekday(Local::now().date_naive());

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "email": "ana@acme.com",
            "date": date,
            "location": "basement",
        }))
        .await;
    // Deserialization of the closed location set fails before the handler.
    assert!(response.status_code().is_client_error());
}
