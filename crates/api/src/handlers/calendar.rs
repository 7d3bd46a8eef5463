//! Calendar handlers: the month grid with per-day classification that
//! drives the client's date picker.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{Local, NaiveDate};
use deskbook_core::calendar::{classify, grid};
use deskbook_core::errors::BookingError;
use deskbook_core::models::calendar::DayCategory;
use deskbook_db::store::BookingStore;
use serde::Serialize;

use crate::{ApiState, middleware::error_handling::AppError};

/// One grid cell enriched with its classification for the requesting day.
#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub day: u32,
    pub in_current_month: bool,
    pub in_previous_month: bool,
    pub in_next_month: bool,
    pub category: DayCategory,
    pub eligible: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthViewResponse {
    pub year: i32,
    pub month: u32,
    pub first_weekday: u32,
    pub today: NaiveDate,
    pub cells: Vec<DayView>,
}

/// Month grid for (year, month). The grid itself is deterministic; the
/// eligibility column depends on the server's current day.
pub async fn month_view<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthViewResponse>, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError(BookingError::Validation(format!(
            "Invalid month: {}. Must be between 1 and 12",
            month
        ))));
    }
    // The holiday list and the booking window only cover nearby years;
    // anything outside this range is a typo or a crafted URL.
    if !(2000..=2100).contains(&year) {
        return Err(AppError(BookingError::Validation(format!(
            "Invalid year: {}. Must be between 2000 and 2100",
            year
        ))));
    }

    let today = Local::now().date_naive();
    let grid = grid::build_month(year, month);

    let cells = grid
        .cells
        .iter()
        .map(|cell| {
            let verdict = classify::classify(cell.date, today, &state.holidays);
            DayView {
                date: cell.date,
                day: cell.day,
                in_current_month: cell.in_current_month,
                in_previous_month: cell.in_previous_month,
                in_next_month: cell.in_next_month,
                category: verdict.category,
                eligible: verdict.eligible,
            }
        })
        .collect();

    Ok(Json(MonthViewResponse {
        year: grid.year,
        month: grid.month,
        first_weekday: grid.first_weekday,
        today,
        cells,
    }))
}
