//! Fixed-window request rate limiter keyed by client identifier.
//!
//! Each key owns a `(window_start, count)` slot. A call either opens a
//! fresh window (when none exists or the previous one has elapsed) or
//! increments the current one, and is admitted while the post-increment
//! count stays within the limit. Bursts aligned at a window boundary can
//! therefore admit up to twice the nominal rate; that is the accepted
//! trade-off of a fixed window over a sliding one.
//!
//! State is in-memory only and lives for the process lifetime.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tracing::debug;

use wl_shared::RateLimitConfig;

/// Per-key counter slot
struct Window {
    started_at: Instant,
    count: u32,
}

/// In-memory fixed-window rate limiter
///
/// The key map is guarded by a read-write lock while each counter sits
/// behind its own mutex, so the update-and-check is atomic per key and
/// requests for distinct keys do not serialize on a shared counter lock.
/// The map itself is write-locked only while inserting a new key.
pub struct FixedWindowRateLimiter {
    windows: RwLock<HashMap<String, Arc<Mutex<Window>>>>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowRateLimiter {
    /// Create a limiter from configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            max_requests: config.max_requests,
            window: config.window(),
        }
    }

    /// Record a request for `key` and report whether it is admitted
    pub fn try_consume(&self, key: &str) -> bool {
        self.try_consume_at(key, Instant::now())
    }

    fn try_consume_at(&self, key: &str, now: Instant) -> bool {
        let slot = self.slot_for(key, now);
        let mut window = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if now.duration_since(window.started_at) > self.window {
            // Window elapsed; the first request of the new window is
            // always admitted.
            window.started_at = now;
            window.count = 1;
            return true;
        }

        window.count += 1;
        let allowed = window.count <= self.max_requests;
        if !allowed {
            debug!(key, count = window.count, "rate limit exceeded");
        }
        allowed
    }

    /// Fetch the slot for `key`, inserting a fresh one if absent
    fn slot_for(&self, key: &str, now: Instant) -> Arc<Mutex<Window>> {
        {
            let windows = self.windows.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = windows.get(key) {
                return Arc::clone(slot);
            }
        }

        let mut windows = self.windows.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(windows.entry(key.to_string()).or_insert_with(|| {
            // Count 0: the caller's increment makes this request the
            // first of the window.
            Arc::new(Mutex::new(Window {
                started_at: now,
                count: 0,
            }))
        }))
    }
}
