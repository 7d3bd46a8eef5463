//! Selection state for the booking calendar: the visible month and the
//! currently picked date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::classify::{self, IneligibleReason};
use crate::calendar::grid;
use crate::holidays::HolidayCalendar;

/// Result of a pick attempt. A rejection is an ordinary outcome the caller
/// turns into user-facing copy, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    Selected,
    Rejected(IneligibleReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    visible_year: i32,
    visible_month: u32,
    selected: Option<NaiveDate>,
}

impl SelectionController {
    /// Start with the month of `today` visible and nothing selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            visible_year: today.year(),
            visible_month: today.month(),
            selected: None,
        }
    }

    pub fn visible(&self) -> (i32, u32) {
        (self.visible_year, self.visible_month)
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Attempt to pick a date. Ineligible dates leave the state untouched
    /// and report why. An eligible pick from a leading/trailing cell of an
    /// adjacent month snaps the visible month to the picked date, so the
    /// grid follows the selection in one step.
    pub fn select(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
        holidays: &HolidayCalendar,
    ) -> SelectOutcome {
        let verdict = classify::classify(date, today, holidays);
        if let Some(reason) = verdict.rejection() {
            return SelectOutcome::Rejected(reason);
        }

        self.selected = Some(date);
        if date.year() != self.visible_year || date.month() != self.visible_month {
            self.visible_year = date.year();
            self.visible_month = date.month();
        }
        SelectOutcome::Selected
    }

    /// Show the previous month. Keeps the selection.
    pub fn previous_month(&mut self) {
        let (year, month) = grid::previous_month(self.visible_year, self.visible_month);
        self.visible_year = year;
        self.visible_month = month;
    }

    /// Show the next month. Keeps the selection.
    pub fn next_month(&mut self) {
        let (year, month) = grid::next_month(self.visible_year, self.visible_month);
        self.visible_year = year;
        self.visible_month = month;
    }
}
