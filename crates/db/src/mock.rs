//! Test doubles for the store boundary: a fully functional in-memory store
//! and a mockall mock for failure injection.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use eyre::{Result, eyre};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, NewBooking};
use crate::store::BookingStore;

/// In-memory [`BookingStore`] with the same observable contract as the
/// Postgres store: assigned ids and timestamps, newest-first ordering,
/// delete reporting whether a row existed.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<DbBooking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn insert(&self, new: NewBooking) -> Result<DbBooking> {
        let row = DbBooking {
            id: Uuid::new_v4(),
            email: new.email,
            date: new.date,
            day_of_week: new.day_of_week,
            location: new.location.as_str().to_string(),
            created_at: Utc::now(),
        };
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| eyre!("store lock poisoned"))?;
        rows.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| eyre!("store lock poisoned"))?;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }

    async fn fetch_all(&self) -> Result<Vec<DbBooking>> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| eyre!("store lock poisoned"))?;
        // Insertion order stands in for created_at; reverse it for the
        // newest-first contract.
        Ok(rows.iter().rev().cloned().collect())
    }
}

mock! {
    pub Store {}

    #[async_trait]
    impl BookingStore for Store {
        async fn insert(&self, new: NewBooking) -> Result<DbBooking>;
        async fn delete(&self, id: Uuid) -> Result<bool>;
        async fn fetch_all(&self) -> Result<Vec<DbBooking>>;
    }
}
