//! The booking ledger: ordering, snapshot fan-out, the duplicate scan and
//! the purges, layered over a [`BookingStore`].
//!
//! Consumers never patch their local view. Every mutation republishes the
//! full ordered snapshot through a watch channel and the latest snapshot
//! always wins, which is what makes interleaved updates safe without any
//! merge logic.

use chrono::NaiveDate;
use deskbook_core::auth::AdminToken;
use deskbook_core::models::booking::{self, Booking};
use deskbook_core::retention;
use eyre::Result;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::health::ConnectionHealth;
use crate::models::NewBooking;
use crate::store::BookingStore;

/// Outcome of a bulk purge. `removed` counts confirmed deletions even when
/// the batch failed partway through.
#[derive(Debug)]
pub struct PurgeReport {
    pub removed: usize,
    pub failure: Option<eyre::Report>,
}

impl PurgeReport {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

pub struct Ledger<S: BookingStore> {
    store: S,
    snapshot: watch::Sender<Vec<Booking>>,
    health: ConnectionHealth,
}

impl<S: BookingStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        let (snapshot, _) = watch::channel(Vec::new());
        Self {
            store,
            snapshot,
            health: ConnectionHealth::new(),
        }
    }

    /// The shared store-health flag, flipped on every store round trip.
    pub fn health(&self) -> &ConnectionHealth {
        &self.health
    }

    /// Record the outcome of a store round trip on the health flag.
    fn observe<T>(&self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.health.mark_ok(),
            Err(_) => self.health.mark_degraded(),
        }
        result
    }

    /// Add a booking. The caller is responsible for validation and the
    /// duplicate check; the ledger only persists and republishes.
    pub async fn add(&self, new: NewBooking) -> Result<Booking> {
        let row = self.observe(self.store.insert(new).await)?;
        let booking = row.into_booking()?;
        info!("Booking added: id={}, date={}", booking.id, booking.date);
        // The insert already persisted. A failed republish is a stale
        // snapshot, not a failed booking; the next mutation republishes.
        if let Err(err) = self.publish().await {
            warn!("Snapshot republish failed after add: {err:#}");
        }
        Ok(booking)
    }

    /// Remove one booking. Returns false when the id no longer exists,
    /// which callers treat as an ordinary outcome.
    pub async fn remove(&self, id: Uuid) -> Result<bool> {
        let removed = self.observe(self.store.delete(id).await)?;
        if removed {
            info!("Booking removed: id={}", id);
            if let Err(err) = self.publish().await {
                warn!("Snapshot republish failed after remove: {err:#}");
            }
        } else {
            debug!("Remove for unknown booking id={}", id);
        }
        Ok(removed)
    }

    /// Every booking, most recently created first.
    pub async fn list(&self) -> Result<Vec<Booking>> {
        let rows = self.observe(self.store.fetch_all().await)?;
        rows.into_iter().map(|r| r.into_booking()).collect()
    }

    /// A live view of the collection. Each observed value is a complete
    /// ordered snapshot; dropping the receiver ends the subscription.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Booking>> {
        self.snapshot.subscribe()
    }

    /// Best-effort duplicate probe: a full scan of the current records for
    /// the same email (exact match) on the same civil day. A concurrent add
    /// from another session can still slip past this check; that race is
    /// accepted rather than locked away.
    pub async fn is_duplicate(&self, email: &str, date: NaiveDate) -> Result<bool> {
        let bookings = self.list().await?;
        Ok(booking::find_duplicate(&bookings, email, date).is_some())
    }

    /// Delete every booking whose own date fell behind the retention
    /// horizon, reporting how many went.
    pub async fn purge_expired(&self, as_of: NaiveDate) -> PurgeReport {
        let bookings = match self.list().await {
            Ok(bookings) => bookings,
            Err(err) => {
                return PurgeReport {
                    removed: 0,
                    failure: Some(err),
                }
            }
        };

        let ids = retention::expired_ids(&bookings, as_of);
        info!(
            "Retention purge as of {}: {} of {} bookings expired",
            as_of,
            ids.len(),
            bookings.len()
        );
        self.delete_batch(ids).await
    }

    /// Delete everything. Destructive and irreversible; the admin token
    /// proves the caller passed the credential check, and confirmation is
    /// the caller's responsibility.
    pub async fn purge_all(&self, token: &AdminToken) -> PurgeReport {
        let bookings = match self.list().await {
            Ok(bookings) => bookings,
            Err(err) => {
                return PurgeReport {
                    removed: 0,
                    failure: Some(err),
                }
            }
        };

        info!(
            "Full purge requested by admin session {}: {} bookings",
            token.session(),
            bookings.len()
        );
        let ids = bookings.iter().map(|b| b.id).collect();
        self.delete_batch(ids).await
    }

    /// Republish the full snapshot to all subscribers. Used after every
    /// mutation and once at startup.
    pub async fn publish(&self) -> Result<()> {
        let bookings = self.list().await?;
        self.snapshot.send_replace(bookings);
        Ok(())
    }

    async fn delete_batch(&self, ids: Vec<Uuid>) -> PurgeReport {
        let mut removed = 0;
        for id in ids {
            match self.observe(self.store.delete(id).await) {
                Ok(_) => removed += 1,
                Err(err) => {
                    // Report what was confirmed before the failure; the
                    // remainder stays for the next run.
                    let _ = self.publish().await;
                    return PurgeReport {
                        removed,
                        failure: Some(err),
                    };
                }
            }
        }

        let failure = self.publish().await.err();
        PurgeReport { removed, failure }
    }
}
