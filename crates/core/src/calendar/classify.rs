//! Day classification: the single place that decides whether a civil day
//! can be booked and how it should be labeled.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::holidays::HolidayCalendar;
use crate::models::calendar::DayCategory;

/// Whether "today" itself may be booked. The service historically shipped
/// both behaviors; this build allows same-day bookings and tests pin the
/// choice here.
pub const SAME_DAY_BOOKING_ALLOWED: bool = true;

/// Furthest bookable day, in days after today.
pub const MAX_FUTURE_DAYS: i64 = 30;

/// Why a day cannot be booked. Horizon checks take precedence over the
/// holiday/weekend rules, and holiday beats weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibleReason {
    Holiday,
    Weekend,
    Past,
    TooFarFuture,
}

/// Full verdict for one civil day. Total over any valid date; there are no
/// error states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub is_past: bool,
    pub is_too_far_future: bool,
    pub eligible: bool,
    pub category: DayCategory,
}

impl DayClassification {
    /// The highest-precedence reason the day is blocked, if any.
    pub fn rejection(&self) -> Option<IneligibleReason> {
        if self.is_past {
            Some(IneligibleReason::Past)
        } else if self.is_too_far_future {
            Some(IneligibleReason::TooFarFuture)
        } else if self.is_holiday {
            Some(IneligibleReason::Holiday)
        } else if self.is_weekend {
            Some(IneligibleReason::Weekend)
        } else {
            None
        }
    }
}

/// Classify a civil day relative to `today`. All comparisons are at day
/// granularity; time-of-day never enters the decision.
pub fn classify(date: NaiveDate, today: NaiveDate, holidays: &HolidayCalendar) -> DayClassification {
    let weekday = date.weekday();
    let is_weekend = weekday == Weekday::Sat || weekday == Weekday::Sun;
    let is_holiday = holidays.contains(date);

    let is_past = if SAME_DAY_BOOKING_ALLOWED {
        date < today
    } else {
        date <= today
    };
    let is_too_far_future = date > today + Duration::days(MAX_FUTURE_DAYS);

    let eligible = !(is_weekend || is_holiday || is_past || is_too_far_future);

    // Holiday takes precedence over weekend for labeling.
    let category = if is_holiday {
        DayCategory::Holiday
    } else if is_weekend {
        DayCategory::Weekend
    } else {
        DayCategory::Available
    };

    DayClassification {
        is_weekend,
        is_holiday,
        is_past,
        is_too_far_future,
        eligible,
        category,
    }
}
