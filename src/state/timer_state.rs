//! Timer state structure and management

use serde::{Deserialize, Serialize};

/// The two states of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Stopped,
    Running,
}

/// Timer state for tracking accumulated run time.
///
/// All values are milliseconds of a monotonic clock. Transitions take the
/// clock reading as an argument so that the state itself never samples time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    running: bool,
    /// Start of the current run segment, only set while running
    start_mark: Option<u64>,
    /// Total of all completed run segments
    accumulated: u64,
}

impl TimerState {
    /// Create a stopped timer with nothing accumulated
    pub fn new() -> Self {
        Self {
            running: false,
            start_mark: None,
            accumulated: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else {
            TimerPhase::Stopped
        }
    }

    pub fn accumulated(&self) -> u64 {
        self.accumulated
    }

    /// Begin a run segment at `now`. Returns false if already running.
    pub fn start(&mut self, now: u64) -> bool {
        if self.running {
            return false;
        }
        self.start_mark = Some(now);
        self.running = true;
        true
    }

    /// Close the current run segment at `now`. Returns false if already stopped.
    pub fn stop(&mut self, now: u64) -> bool {
        if !self.running {
            return false;
        }
        self.accumulated = self.accumulated.saturating_add(self.segment(now));
        self.start_mark = None;
        self.running = false;
        true
    }

    /// Clear everything and leave the timer stopped.
    ///
    /// An in-progress segment is dropped; the timer does not resume.
    pub fn reset(&mut self) {
        self.accumulated = 0;
        self.start_mark = None;
        self.running = false;
    }

    /// Elapsed time as of `now`, including the in-progress segment
    pub fn elapsed(&self, now: u64) -> u64 {
        if self.running {
            self.accumulated.saturating_add(self.segment(now))
        } else {
            self.accumulated
        }
    }

    pub fn snapshot(&self, now: u64) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase(),
            elapsed_ms: self.elapsed(now),
            accumulated_ms: self.accumulated,
        }
    }

    fn segment(&self, now: u64) -> u64 {
        self.start_mark
            .map(|mark| now.saturating_sub(mark))
            .unwrap_or(0)
    }
}

/// Point-in-time view of the timer, suitable for API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: TimerPhase,
    pub elapsed_ms: u64,
    pub accumulated_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_stopped_and_empty() {
        let state = TimerState::new();
        assert_eq!(state.phase(), TimerPhase::Stopped);
        assert_eq!(state.elapsed(10_000), 0);
        assert_eq!(state, TimerState::default());
    }

    #[test]
    fn start_twice_keeps_first_mark() {
        let mut state = TimerState::new();
        assert!(state.start(100));
        assert!(!state.start(400));
        assert_eq!(state.elapsed(600), 500);
    }

    #[test]
    fn stop_twice_keeps_accumulated() {
        let mut state = TimerState::new();
        state.start(0);
        assert!(state.stop(300));
        assert!(!state.stop(900));
        assert_eq!(state.accumulated(), 300);
        assert_eq!(state.elapsed(5_000), 300);
    }

    #[test]
    fn clock_reading_behind_mark_counts_as_zero() {
        let mut state = TimerState::new();
        state.start(1_000);
        assert_eq!(state.elapsed(900), 0);
        state.stop(900);
        assert_eq!(state.accumulated(), 0);
    }

    #[test]
    fn snapshot_reports_running_segment() {
        let mut state = TimerState::new();
        state.start(0);
        state.stop(50);
        state.start(100);

        let snapshot = state.snapshot(130);
        assert_eq!(snapshot.phase, TimerPhase::Running);
        assert_eq!(snapshot.elapsed_ms, 80);
        assert_eq!(snapshot.accumulated_ms, 50);
    }
}
