//! Elapsed-time accumulator
//!
//! Couples a [`TimerState`] with the clock it is measured against. This is the
//! whole stopwatch core: four infallible operations, no internal locking.
//! Callers on multiple threads must serialize access themselves (see
//! [`AppState`](super::AppState)).

use tracing::{debug, info};

use super::timer_state::{TimerSnapshot, TimerState};
use crate::clock::MonotonicClock;

#[derive(Debug)]
pub struct ElapsedTimeAccumulator<C> {
    clock: C,
    state: TimerState,
}

impl<C: MonotonicClock> ElapsedTimeAccumulator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: TimerState::new(),
        }
    }

    /// Start a run segment. No-op while running.
    pub fn start(&mut self) {
        let now = self.clock.now_millis();
        if self.state.start(now) {
            info!("Stopwatch started at {}ms", now);
        } else {
            debug!("Stopwatch already running, start ignored");
        }
    }

    /// Stop the current run segment. No-op while stopped.
    pub fn stop(&mut self) {
        let now = self.clock.now_millis();
        if self.state.stop(now) {
            info!("Stopwatch stopped, accumulated {}ms", self.state.accumulated());
        } else {
            debug!("Stopwatch already stopped, stop ignored");
        }
    }

    /// Clear accumulated time. Always leaves the stopwatch stopped, even if it
    /// was running.
    pub fn reset(&mut self) {
        if self.state.is_running() {
            info!("Stopwatch reset while running, current segment dropped");
        } else {
            info!("Stopwatch reset");
        }
        self.state.reset();
    }

    /// Total elapsed milliseconds, including any segment in progress
    pub fn elapsed(&self) -> u64 {
        self.state.elapsed(self.clock.now_millis())
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.state.snapshot(self.clock.now_millis())
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }
}
