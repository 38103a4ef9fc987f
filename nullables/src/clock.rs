//! Null clock — deterministic time for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use streampool_types::Timestamp;

/// A clock that only moves when told to.
///
/// Monotonic by construction: time can be advanced, never rewound, matching
/// the non-decreasing `now` the engine requires from its host.
pub struct NullClock {
    secs: AtomicU64,
}

impl NullClock {
    pub fn new(start_secs: u64) -> Self {
        Self {
            secs: AtomicU64::new(start_secs),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.secs.load(Ordering::Relaxed))
    }

    /// Move time forward by `secs` and return the new now.
    pub fn advance(&self, secs: u64) -> Timestamp {
        let new = self.secs.fetch_add(secs, Ordering::Relaxed) + secs;
        Timestamp::new(new)
    }
}
