//! Timestamp type used throughout the workspace.
//!
//! Timestamps are whole seconds, supplied to the engine by the host's
//! monotonic clock. The engine never reads system time itself; every
//! operation receives `now` from its caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in time, in whole seconds since the host clock's epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Time zero.
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Whole seconds from `earlier` up to `self`; zero if `earlier` is not
    /// actually earlier.
    pub fn seconds_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_since_forward_and_backward() {
        let a = Timestamp::new(100);
        let b = Timestamp::new(130);
        assert_eq!(b.seconds_since(a), 30);
        assert_eq!(a.seconds_since(b), 0);
        assert_eq!(a.seconds_since(a), 0);
    }
}
