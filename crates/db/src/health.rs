//! Connection health for the store boundary.
//!
//! The ledger flips this flag on every store round trip: any failure marks
//! the connection degraded, the next success clears it. The health endpoint
//! exposes the flag so clients can tell a down store apart from a one-off
//! request failure.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared degraded-store flag. Cheap to clone; all clones observe the same
/// state.
#[derive(Debug, Clone, Default)]
pub struct ConnectionHealth {
    degraded: Arc<AtomicBool>,
}

impl ConnectionHealth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_ok(&self) {
        self.degraded.store(false, Ordering::Relaxed);
    }

    pub fn mark_degraded(&self) {
        self.degraded.store(true, Ordering::Relaxed);
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }
}
