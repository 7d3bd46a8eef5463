use chrono::{DateTime, NaiveDate, Utc};
use deskbook_core::models::booking::{Booking, Location};
use eyre::eyre;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A booking row as stored. `location` is kept as its wire string and
/// converted to the closed enum at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub email: String,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl DbBooking {
    pub fn into_booking(self) -> eyre::Result<Booking> {
        let location = Location::parse(&self.location)
            .ok_or_else(|| eyre!("Unknown location value in store: {}", self.location))?;

        Ok(Booking {
            id: self.id,
            email: self.email,
            date: self.date,
            day_of_week: self.day_of_week,
            location,
            created_at: self.created_at,
        })
    }
}

/// Fields supplied by the caller on insert; the store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub email: String,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub location: Location,
}
