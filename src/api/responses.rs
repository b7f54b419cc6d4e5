//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSnapshot;

/// Body of a channel call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCallRequest {
    pub method: String,
    /// Accepted for compatibility with shells that always send arguments; unused
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
}

/// API response structure for the start/stop/reset endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a success response
    pub fn ok(message: String, timer: TimerSnapshot) -> Self {
        Self::new("ok".to_string(), message, timer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElapsedResponse {
    pub elapsed_ms: u64,
}

/// Returned when a call arrives on a channel this server does not answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn unknown_channel(channel: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: format!("Unknown channel: {}", channel),
        }
    }
}

/// Status response with timer information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub channel: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
