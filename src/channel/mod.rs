//! Method channel dispatch
//!
//! Maps call names sent by the application shell onto the stopwatch
//! operations. Unrecognized names never reach the stopwatch; they are answered
//! with [`MethodResult::NotImplemented`].

pub mod method;

pub use method::{MethodResult, StopwatchMethod, UnknownMethod, DEFAULT_CHANNEL};

use tracing::warn;

use crate::{clock::MonotonicClock, state::ElapsedTimeAccumulator};

/// Run one recognized call against the stopwatch
pub fn dispatch<C: MonotonicClock>(
    method: StopwatchMethod,
    stopwatch: &mut ElapsedTimeAccumulator<C>,
) -> MethodResult {
    match method {
        StopwatchMethod::Start => {
            stopwatch.start();
            MethodResult::ack()
        }
        StopwatchMethod::Stop => {
            stopwatch.stop();
            MethodResult::ack()
        }
        StopwatchMethod::Reset => {
            stopwatch.reset();
            MethodResult::ack()
        }
        StopwatchMethod::GetElapsedTime => MethodResult::value(stopwatch.elapsed()),
    }
}

/// Parse a call name and dispatch it, answering unknown names as not implemented
pub fn handle_call<C: MonotonicClock>(
    name: &str,
    stopwatch: &mut ElapsedTimeAccumulator<C>,
) -> MethodResult {
    match name.parse::<StopwatchMethod>() {
        Ok(method) => dispatch(method, stopwatch),
        Err(e) => {
            warn!("{}", e);
            MethodResult::not_implemented(e.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn calls_drive_the_stopwatch() {
        let clock = ManualClock::new();
        let mut stopwatch = ElapsedTimeAccumulator::new(clock.clone());

        assert_eq!(handle_call("startStopwatch", &mut stopwatch), MethodResult::ack());
        clock.advance_millis(500);
        assert_eq!(handle_call("stopStopwatch", &mut stopwatch), MethodResult::ack());
        assert_eq!(
            handle_call("getElapsedTime", &mut stopwatch),
            MethodResult::value(500)
        );
        assert_eq!(handle_call("resetStopwatch", &mut stopwatch), MethodResult::ack());
        assert_eq!(
            handle_call("getElapsedTime", &mut stopwatch),
            MethodResult::value(0)
        );
    }

    #[test]
    fn unknown_call_leaves_stopwatch_untouched() {
        let clock = ManualClock::new();
        let mut stopwatch = ElapsedTimeAccumulator::new(clock.clone());
        stopwatch.start();
        clock.advance_millis(20);

        let result = handle_call("lapStopwatch", &mut stopwatch);
        assert_eq!(result, MethodResult::not_implemented("lapStopwatch"));
        assert!(!result.is_success());
        assert!(stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), 20);
    }
}
