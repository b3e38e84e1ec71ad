use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "highxbot",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
///
/// The knowledge base is loaded before the listener binds, so a running
/// server is always ready; the entry count is reported for operators.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "service": "highxbot",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "knowledge_entries": state.knowledge_entries(),
        "fuzzy_enabled": state.responder.matcher().config().fuzzy_enabled,
    }))
}

/// Reply counters by pipeline rule
pub async fn metrics(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "uptime_seconds": uptime_seconds(),
        "replies": state.replies.snapshot(),
    }))
}
