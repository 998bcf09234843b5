//! Single-slot TTL cache.
//!
//! The dashboard stats endpoint takes no parameters, so its cache is one
//! value with an expiry stamp rather than a keyed map. The cell is injected
//! through application state so tests can construct one with an arbitrary
//! TTL and multi-instance deployments can swap it out for a shared store.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A single cached value that expires `ttl` after it was stored.
///
/// `get` returns `None` once the value is older than the TTL; callers then
/// recompute and `store` the fresh value. Concurrent readers during the
/// recompute window may each miss and recompute -- the last writer wins,
/// which is acceptable for an idempotent aggregate query.
#[derive(Debug)]
pub struct TtlCell<T> {
    ttl: Duration,
    slot: Mutex<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCell<T> {
    /// Create an empty cell with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value if one was stored within the TTL window.
    pub fn get(&self) -> Option<T> {
        let slot = self.slot.lock().expect("TtlCell mutex poisoned");
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    /// Store a fresh value, resetting the expiry clock.
    pub fn store(&self, value: T) {
        let mut slot = self.slot.lock().expect("TtlCell mutex poisoned");
        *slot = Some((Instant::now(), value));
    }

    /// Drop any cached value, forcing the next `get` to miss.
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().expect("TtlCell mutex poisoned");
        *slot = None;
    }
}
