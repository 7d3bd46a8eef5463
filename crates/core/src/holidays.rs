//! Static national holiday list for the covered calendar year.
//!
//! This is configuration data, not derived: extending coverage to another
//! year means supplying a new list. Keeping it to a single year is a
//! deliberate non-feature of the service.

use chrono::NaiveDate;

/// National holidays for 2025 as (year, month, day) triples.
const HOLIDAYS_2025: &[(i32, u32, u32)] = &[
    (2025, 1, 1),   // New Year's Day
    (2025, 2, 24),  // Carnival Monday
    (2025, 2, 25),  // Carnival Tuesday
    (2025, 4, 18),  // Good Friday
    (2025, 4, 21),  // Tiradentes
    (2025, 5, 1),   // Labour Day
    (2025, 6, 19),  // Corpus Christi
    (2025, 9, 7),   // Independence Day
    (2025, 10, 12), // Our Lady of Aparecida
    (2025, 11, 2),  // All Souls' Day
    (2025, 11, 15), // Republic Day
    (2025, 12, 25), // Christmas
];

/// Lookup table for holiday classification.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    days: Vec<NaiveDate>,
}

impl HolidayCalendar {
    /// The built-in list for 2025.
    pub fn current_year() -> Self {
        let days = HOLIDAYS_2025
            .iter()
            .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
            .collect();
        Self { days }
    }

    /// An explicit list, for tests or a replacement year.
    pub fn from_days(days: Vec<NaiveDate>) -> Self {
        Self { days }
    }

    /// Exact civil-day membership check.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::current_year()
    }
}
