//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

use crate::{
    channel::{MethodResult, StopwatchMethod},
    state::AppState,
};
use super::responses::{
    ApiResponse, ElapsedResponse, ErrorResponse, HealthResponse, MethodCallRequest, StatusResponse,
};

/// Handle POST /channel/*channel - Answer a method call from the shell
pub async fn channel_handler(
    State(state): State<Arc<AppState>>,
    Path(channel): Path<String>,
    Json(request): Json<MethodCallRequest>,
) -> Response {
    // Channel names contain slashes, so the route captures the whole remainder
    let channel = channel.trim_start_matches('/');
    if channel != state.channel {
        warn!("Call {} on unknown channel {}", request.method, channel);
        return (StatusCode::NOT_FOUND, Json(ErrorResponse::unknown_channel(channel))).into_response();
    }

    match state.handle_call(&request.method) {
        Ok(result @ MethodResult::Success { .. }) => (StatusCode::OK, Json(result)).into_response(),
        Ok(result @ MethodResult::NotImplemented { .. }) => {
            (StatusCode::NOT_IMPLEMENTED, Json(result)).into_response()
        }
        Err(e) => {
            error!("Failed to handle {}: {}", request.method, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn apply(state: &AppState, method: StopwatchMethod, message: &str) -> Result<Json<ApiResponse>, StatusCode> {
    match state.apply(method) {
        Ok(timer) => {
            info!("{} endpoint called", method);
            Ok(Json(ApiResponse::ok(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to apply {}: {}", method, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start the stopwatch
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    apply(&state, StopwatchMethod::Start, "Stopwatch started")
}

/// Handle POST /stop - Stop the stopwatch
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    apply(&state, StopwatchMethod::Stop, "Stopwatch stopped")
}

/// Handle POST /reset - Reset the stopwatch
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    apply(&state, StopwatchMethod::Reset, "Stopwatch reset")
}

/// Handle GET /elapsed - Read elapsed milliseconds
pub async fn elapsed_handler(State(state): State<Arc<AppState>>) -> Result<Json<ElapsedResponse>, StatusCode> {
    match state.elapsed() {
        Ok(elapsed_ms) => Ok(Json(ElapsedResponse { elapsed_ms })),
        Err(e) => {
            error!("Failed to read elapsed time: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current stopwatch status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_snapshot() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        channel: state.channel.clone(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
