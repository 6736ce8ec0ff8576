//! Search clock: a fixed start instant and a time allowance.

use std::time::{Duration, Instant};

/// Wall-clock budget shared by every node of one search.
///
/// Started once at the root; nodes only read it. Expiry is cooperative: the
/// search checks [`is_expired`](SearchClock::is_expired) on node entry and
/// falls back to the static evaluation once it returns `true`.
#[derive(Debug, Clone, Copy)]
pub struct SearchClock {
    start: Instant,
    allowance: Duration,
}

impl SearchClock {
    /// Start the clock now with the given allowance.
    pub fn start(allowance: Duration) -> Self {
        Self {
            start: Instant::now(),
            allowance,
        }
    }

    /// The time budget.
    #[inline]
    pub fn allowance(&self) -> Duration {
        self.allowance
    }

    /// Time since the clock was started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the elapsed time has reached the allowance.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.allowance
    }
}
