//! State management module
//!
//! This module contains the stopwatch core and the server state that owns it.

pub mod timer_state;
pub mod stopwatch;
pub mod app_state;

// Re-export main types
pub use timer_state::{TimerPhase, TimerSnapshot, TimerState};
pub use stopwatch::ElapsedTimeAccumulator;
pub use app_state::{AppState, SharedClock};
