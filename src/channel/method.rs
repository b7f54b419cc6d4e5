//! Method names recognized on the stopwatch channel

use std::{fmt, str::FromStr};

use serde::Serialize;

/// Default name of the channel the shell calls into
pub const DEFAULT_CHANNEL: &str = "com.example.timer/stopwatch";

/// The four calls the stopwatch channel answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchMethod {
    Start,
    Stop,
    Reset,
    GetElapsedTime,
}

impl StopwatchMethod {
    pub const ALL: [StopwatchMethod; 4] = [
        StopwatchMethod::Start,
        StopwatchMethod::Stop,
        StopwatchMethod::Reset,
        StopwatchMethod::GetElapsedTime,
    ];

    /// Wire name of the call
    pub fn as_str(&self) -> &'static str {
        match self {
            StopwatchMethod::Start => "startStopwatch",
            StopwatchMethod::Stop => "stopStopwatch",
            StopwatchMethod::Reset => "resetStopwatch",
            StopwatchMethod::GetElapsedTime => "getElapsedTime",
        }
    }
}

impl fmt::Display for StopwatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call name outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "method not implemented: {}", self.0)
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for StopwatchMethod {
    type Err = UnknownMethod;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "startStopwatch" => Ok(StopwatchMethod::Start),
            "stopStopwatch" => Ok(StopwatchMethod::Stop),
            "resetStopwatch" => Ok(StopwatchMethod::Reset),
            "getElapsedTime" => Ok(StopwatchMethod::GetElapsedTime),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

/// Outcome of a channel call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResult {
    /// Call handled; `result` is null for acknowledgments
    Success { result: Option<u64> },
    /// Call name not recognized
    NotImplemented { method: String },
}

impl MethodResult {
    pub fn ack() -> Self {
        MethodResult::Success { result: None }
    }

    pub fn value(value: u64) -> Self {
        MethodResult::Success {
            result: Some(value),
        }
    }

    pub fn not_implemented(method: impl Into<String>) -> Self {
        MethodResult::NotImplemented {
            method: method.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for method in StopwatchMethod::ALL {
            assert_eq!(method.as_str().parse::<StopwatchMethod>(), Ok(method));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_names() {
        assert_eq!(
            "pauseStopwatch".parse::<StopwatchMethod>(),
            Err(UnknownMethod("pauseStopwatch".to_string()))
        );
        assert!("StartStopwatch".parse::<StopwatchMethod>().is_err());
        assert!("".parse::<StopwatchMethod>().is_err());
    }

    #[test]
    fn serializes_results_like_channel_replies() {
        let ack = serde_json::to_value(MethodResult::ack()).unwrap();
        assert_eq!(ack, serde_json::json!({"status": "success", "result": null}));

        let value = serde_json::to_value(MethodResult::value(700)).unwrap();
        assert_eq!(value, serde_json::json!({"status": "success", "result": 700}));

        let missing = serde_json::to_value(MethodResult::not_implemented("lap")).unwrap();
        assert_eq!(
            missing,
            serde_json::json!({"status": "notImplemented", "method": "lap"})
        );
    }
}
