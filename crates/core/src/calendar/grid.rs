//! Month grid construction for the booking calendar.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar::{CalendarCell, MonthGrid};

/// Number of days in a month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weekday column of day 1 of a month, Sunday = 0.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// The month before (year, month), wrapping the year at January.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The month after (year, month), wrapping the year at December.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Build the full grid for a month: trailing days of the previous month down
/// to the Sunday column, every day of the month, then leading days of the
/// next month until the cell count is a multiple of seven. Deterministic in
/// (year, month).
pub fn build_month(year: i32, month: u32) -> MonthGrid {
    let first_weekday = first_weekday_of_month(year, month);
    let total_days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(42);

    // Fill the first week with the tail of the previous month.
    let (prev_year, prev_month) = previous_month(year, month);
    let prev_days = days_in_month(prev_year, prev_month);
    for offset in (0..first_weekday).rev() {
        let day = prev_days - offset;
        if let Some(date) = NaiveDate::from_ymd_opt(prev_year, prev_month, day) {
            cells.push(CalendarCell {
                date,
                day,
                in_current_month: false,
                in_previous_month: true,
                in_next_month: false,
            });
        }
    }

    for day in 1..=total_days {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            cells.push(CalendarCell {
                date,
                day,
                in_current_month: true,
                in_previous_month: false,
                in_next_month: false,
            });
        }
    }

    // Pad to whole weeks with the head of the next month. At the edge of
    // the representable date range the next month does not exist; the grid
    // then ends on the last real day instead of looping on skipped dates.
    let (next_year, next_mon) = next_month(year, month);
    let mut day = 1;
    while cells.len() % 7 != 0 {
        let Some(date) = NaiveDate::from_ymd_opt(next_year, next_mon, day) else {
            break;
        };
        cells.push(CalendarCell {
            date,
            day,
            in_current_month: false,
            in_previous_month: false,
            in_next_month: true,
        });
        day += 1;
    }

    MonthGrid {
        year,
        month,
        first_weekday,
        cells,
    }
}
