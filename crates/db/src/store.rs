//! The document-store boundary: insert, delete and fetch-everything.
//!
//! The ledger layers every derived query (ordering is done by the store,
//! duplicate and retention scans happen over fetched snapshots) on top of
//! these three operations, so swapping the backing store never touches the
//! booking rules.

use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::models::{DbBooking, NewBooking};

#[async_trait]
pub trait BookingStore {
    /// Insert a record; the store assigns `id` and `created_at`.
    async fn insert(&self, new: NewBooking) -> Result<DbBooking>;

    /// Delete by id. Returns whether a record was actually removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Every record, most recently created first.
    async fn fetch_all(&self) -> Result<Vec<DbBooking>>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgStore {
    async fn insert(&self, new: NewBooking) -> Result<DbBooking> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        debug!(
            "Inserting booking: id={}, email={}, date={}",
            id, new.email, new.date
        );

        let booking = sqlx::query_as::<_, DbBooking>(
            r#"
            INSERT INTO bookings (id, email, date, day_of_week, location, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, date, day_of_week, location, created_at
            "#,
        )
        .bind(id)
        .bind(&new.email)
        .bind(new.date)
        .bind(&new.day_of_week)
        .bind(new.location.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        debug!("Deleting booking: id={}", id);

        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn fetch_all(&self) -> Result<Vec<DbBooking>> {
        let bookings = sqlx::query_as::<_, DbBooking>(
            r#"
            SELECT id, email, date, day_of_week, location, created_at
            FROM bookings
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }
}
