use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_month_view_june_2025() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/calendar/2025/6").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["year"], 2025);
    assert_eq!(body["month"], 6);
    // June 2025 starts on a Sunday.
    assert_eq!(body["first_weekday"], 0);

    let cells = body["cells"].as_array().unwrap();
    // 30 days, no leading padding, 5 trailing cells to fill the last week.
    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0]["date"], "2025-06-01");
    assert_eq!(cells[0]["in_current_month"], true);
    assert!(cells[30..].iter().all(|c| c["in_next_month"] == true));
}

#[tokio::test]
async fn test_month_view_includes_both_paddings() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/calendar/2025/8").await;
    response.assert_status_ok();
    let body: Value = response.json();

    let cells = body["cells"].as_array().unwrap();
    // August 2025 starts on a Friday: 5 leading July cells, 31 days,
    // 6 trailing September cells.
    assert_eq!(cells.len(), 42);
    assert_eq!(cells[0]["date"], "2025-07-27");
    assert!(cells[..5].iter().all(|c| c["in_previous_month"] == true));
    assert_eq!(cells[5]["date"], "2025-08-01");
    assert!(cells[36..].iter().all(|c| c["in_next_month"] == true));
}

#[tokio::test]
async fn test_month_view_weekend_cells_are_never_eligible() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/calendar/2025/6").await;
    let body: Value = response.json();

    for cell in body["cells"].as_array().unwrap() {
        if cell["category"] == "weekend" {
            assert_eq!(cell["eligible"], false, "weekend cell {}", cell["date"]);
        }
    }
    // Sunday-first layout: every 7th cell of June 2025 is a Sunday.
    assert_eq!(body["cells"][0]["category"], "weekend");
    assert_eq!(body["cells"][7]["category"], "weekend");
}

#[tokio::test]
async fn test_month_view_rejects_invalid_month() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/calendar/2025/13").await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Validation error: Invalid month: 13. Must be between 1 and 12"
    );

    let response = ctx.server.get("/api/calendar/2025/0").await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_month_view_rejects_out_of_range_year() {
    let ctx = TestContext::new();

    // December of chrono's last representable year has no next month; the
    // request is refused up front instead of reaching the grid builder.
    let response = ctx.server.get("/api/calendar/262142/12").await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Validation error: Invalid year: 262142. Must be between 2000 and 2100"
    );

    let response = ctx.server.get("/api/calendar/1999/6").await;
    assert_eq!(response.status_code(), 400);
}
