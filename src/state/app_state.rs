//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{ElapsedTimeAccumulator, TimerSnapshot};
use crate::{
    channel::{self, MethodResult, StopwatchMethod},
    clock::{MonotonicClock, SystemMonotonicClock},
};

/// Clock shared between the stopwatch and whoever constructed it
pub type SharedClock = Arc<dyn MonotonicClock + Send + Sync>;

/// Server state injected into every handler.
///
/// The stopwatch itself assumes serialized access; every operation here takes
/// the single stopwatch lock for the duration of one call.
pub struct AppState {
    /// The stopwatch, guarded by one lock
    pub stopwatch: Mutex<ElapsedTimeAccumulator<SharedClock>>,
    /// Name of the channel this handler answers on
    pub channel: String,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last call tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState measuring time with the given clock
    pub fn new(port: u16, host: String, channel: String, clock: SharedClock) -> Self {
        Self {
            stopwatch: Mutex::new(ElapsedTimeAccumulator::new(clock)),
            channel,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Create a new AppState backed by the process monotonic clock
    pub fn with_system_clock(port: u16, host: String, channel: String) -> Self {
        Self::new(port, host, channel, Arc::new(SystemMonotonicClock::new()))
    }

    fn lock_stopwatch(&self) -> Result<MutexGuard<'_, ElapsedTimeAccumulator<SharedClock>>, String> {
        self.stopwatch.lock()
            .map_err(|e| format!("Failed to lock stopwatch: {}", e))
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Run a recognized call against the stopwatch
    pub fn call(&self, method: StopwatchMethod) -> Result<MethodResult, String> {
        let result = {
            let mut stopwatch = self.lock_stopwatch()?;
            channel::dispatch(method, &mut *stopwatch)
        };

        debug!("Handled {} -> {:?}", method, result);
        self.record_action(method.as_str());
        Ok(result)
    }

    /// Run a call by name; unknown names are answered as not implemented
    pub fn handle_call(&self, name: &str) -> Result<MethodResult, String> {
        match name.parse::<StopwatchMethod>() {
            Ok(method) => self.call(method),
            Err(_) => {
                let mut stopwatch = self.lock_stopwatch()?;
                Ok(channel::handle_call(name, &mut *stopwatch))
            }
        }
    }

    /// Run an acknowledgment call and return the timer as it stands afterwards
    pub fn apply(&self, method: StopwatchMethod) -> Result<TimerSnapshot, String> {
        let snapshot = {
            let mut stopwatch = self.lock_stopwatch()?;
            channel::dispatch(method, &mut *stopwatch);
            stopwatch.snapshot()
        };

        self.record_action(method.as_str());
        Ok(snapshot)
    }

    pub fn start(&self) -> Result<TimerSnapshot, String> {
        self.apply(StopwatchMethod::Start)
    }

    pub fn stop(&self) -> Result<TimerSnapshot, String> {
        self.apply(StopwatchMethod::Stop)
    }

    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        self.apply(StopwatchMethod::Reset)
    }

    /// Current elapsed milliseconds
    pub fn elapsed(&self) -> Result<u64, String> {
        self.lock_stopwatch().map(|stopwatch| stopwatch.elapsed())
    }

    /// Get current timer snapshot
    pub fn get_timer_snapshot(&self) -> Result<TimerSnapshot, String> {
        self.lock_stopwatch().map(|stopwatch| stopwatch.snapshot())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last call information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{channel::DEFAULT_CHANNEL, clock::ManualClock, state::TimerPhase};

    fn state_with_clock() -> (ManualClock, AppState) {
        let clock = ManualClock::new();
        let state = AppState::new(
            0,
            "127.0.0.1".to_string(),
            DEFAULT_CHANNEL.to_string(),
            Arc::new(clock.clone()),
        );
        (clock, state)
    }

    #[test]
    fn apply_returns_post_call_snapshot() {
        let (clock, state) = state_with_clock();

        let started = state.start().unwrap();
        assert_eq!(started.phase, TimerPhase::Running);

        clock.advance_millis(90);
        let stopped = state.stop().unwrap();
        assert_eq!(stopped.phase, TimerPhase::Stopped);
        assert_eq!(stopped.elapsed_ms, 90);

        let reset = state.reset().unwrap();
        assert_eq!(reset.elapsed_ms, 0);
    }

    #[test]
    fn tracks_last_recognized_call() {
        let (_clock, state) = state_with_clock();
        assert_eq!(state.get_last_action(), (None, None));

        state.handle_call("startStopwatch").unwrap();
        state.handle_call("bogus").unwrap();

        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("startStopwatch"));
        assert!(time.is_some());
    }

    #[test]
    fn handle_call_answers_unknown_names() {
        let (_clock, state) = state_with_clock();
        let result = state.handle_call("lap").unwrap();
        assert_eq!(result, MethodResult::not_implemented("lap"));
    }

    #[test]
    fn uptime_formats_seconds() {
        let (_clock, state) = state_with_clock();
        assert!(state.get_uptime().ends_with('s'));
    }
}
