use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of the rendered month grid. Ephemeral: rebuilt on every grid
/// request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Absolute civil day this cell resolves to.
    pub date: NaiveDate,
    /// Day-of-month number shown in the cell.
    pub day: u32,
    pub in_current_month: bool,
    pub in_previous_month: bool,
    pub in_next_month: bool,
}

/// A full month grid: leading cells from the previous month, every day of
/// the month, trailing cells from the next month, always whole weeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// Weekday column of day 1, Sunday = 0.
    pub first_weekday: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Cells grouped into rows of seven, Sunday-first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }
}

/// Display category for a day. Mutually exclusive; holiday wins over
/// weekend. Drives styling only, never eligibility on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    Holiday,
    Weekend,
    Available,
}
