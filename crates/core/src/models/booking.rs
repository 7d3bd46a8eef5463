use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Work location for a booking. Two office sites plus remote; the set is
/// closed and serialized in kebab-case on the wire and in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Headquarters,
    Annex,
    Remote,
}

impl Location {
    /// Display label used in exports and client copy.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Headquarters => "Headquarters",
            Location::Annex => "Annex Office",
            Location::Remote => "Home Office",
        }
    }

    /// Stored wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Headquarters => "headquarters",
            Location::Annex => "annex",
            Location::Remote => "remote",
        }
    }

    pub fn parse(value: &str) -> Option<Location> {
        match value {
            "headquarters" => Some(Location::Headquarters),
            "annex" => Some(Location::Annex),
            "remote" => Some(Location::Remote),
            _ => None,
        }
    }
}

/// A persisted booking. Records are immutable once created; there is no
/// update operation, only add and remove.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub email: String,
    /// Civil day of the booking. Time-of-day carries no meaning; two
    /// bookings on the same day are the same slot.
    pub date: NaiveDate,
    /// Weekday label computed once at creation and persisted verbatim.
    pub day_of_week: String,
    pub location: Location,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub email: String,
    pub date: NaiveDate,
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub email: String,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub location: Location,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeResponse {
    pub removed: usize,
}

/// English weekday label for a civil day, Sunday-first to match the
/// calendar layout.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Scan the current snapshot for a booking with the same email (exact string
/// match, as stored) and the same civil day. O(n) over the full collection;
/// acceptable only because retention keeps the set small. If that assumption
/// ever breaks, this needs an indexed lookup keyed by (email, day).
pub fn find_duplicate<'a>(
    bookings: &'a [Booking],
    email: &str,
    date: NaiveDate,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .find(|b| b.email == email && b.date == date)
}
