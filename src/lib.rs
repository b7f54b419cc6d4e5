//! Stopwatch Channel - a stopwatch served to an application shell
//!
//! This library provides a monotonic elapsed-time accumulator with start, stop,
//! reset and read operations, and a method-channel style HTTP bridge that maps
//! call names from the shell onto those operations.

pub mod config;
pub mod clock;
pub mod state;
pub mod channel;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use clock::{ManualClock, MonotonicClock, SystemMonotonicClock};
pub use state::{AppState, ElapsedTimeAccumulator, TimerState};
pub use channel::{MethodResult, StopwatchMethod};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
