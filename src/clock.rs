//! Monotonic time sources
//!
//! All timing in the stopwatch is measured against a [`MonotonicClock`]. The
//! real implementation is backed by [`std::time::Instant`], which never goes
//! backwards and is unaffected by wall-clock adjustments. Tests use
//! [`ManualClock`] to advance time deterministically.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// A clock that returns milliseconds since an arbitrary, fixed epoch.
pub trait MonotonicClock {
    /// Current reading in milliseconds. Successive readings never decrease.
    fn now_millis(&self) -> u64;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Process-local monotonic clock with its epoch at construction time
#[derive(Debug, Clone, Copy)]
pub struct SystemMonotonicClock {
    epoch: Instant,
}

impl SystemMonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemMonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemMonotonicClock {
    fn now_millis(&self) -> u64 {
        // Truncates sub-millisecond precision toward zero
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary reading
    pub fn starting_at(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.millis.fetch_add(by, Ordering::SeqCst);
    }

    pub fn advance_millis(&self, by: u64) {
        self.millis.fetch_add(by, Ordering::SeqCst);
    }
}

impl MonotonicClock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_reading() {
        let clock = ManualClock::starting_at(1_000);
        let other = clock.clone();

        clock.advance(Duration::from_millis(250));
        assert_eq!(other.now_millis(), 1_250);

        other.advance_millis(50);
        assert_eq!(clock.now_millis(), 1_300);
    }

    #[test]
    fn system_clock_never_goes_backwards() {
        let clock = SystemMonotonicClock::new();
        let mut last = clock.now_millis();
        for _ in 0..1_000 {
            let now = clock.now_millis();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn clock_behind_arc_delegates() {
        let clock: Arc<dyn MonotonicClock + Send + Sync> = Arc::new(ManualClock::starting_at(42));
        assert_eq!(clock.now_millis(), 42);
    }
}
