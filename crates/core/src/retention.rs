//! Retention policy: bookings whose own civil day has fallen more than two
//! days behind are purged so the collection stays small enough for the
//! full-collection duplicate scan.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::models::booking::Booking;

/// Days a booking outlives its own date before the automatic purge takes it.
pub const RETENTION_DAYS: i64 = 2;

/// True iff the booking's date (not its creation time) is strictly older
/// than the retention horizon. A booking dated exactly `as_of - 2` days is
/// retained; anything older is purged. Future dates never expire.
pub fn is_expired(booking_day: NaiveDate, as_of: NaiveDate) -> bool {
    booking_day < as_of - Duration::days(RETENTION_DAYS)
}

/// Ids of every record the automatic purge should remove as of the given
/// day.
pub fn expired_ids(bookings: &[Booking], as_of: NaiveDate) -> Vec<Uuid> {
    bookings
        .iter()
        .filter(|b| is_expired(b.date, as_of))
        .map(|b| b.id)
        .collect()
}
