//! Operational endpoints: health and metrics.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

use super::{AppState, HealthResponse, View};

/// `GET /health`
///
/// Pings the store; answers 503 when the database is unreachable.
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let database = match state.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check failed: {:#}", e);
            false
        }
    };

    let (status, label) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    View::new(
        "system/health",
        Vec::new(),
        HealthResponse {
            status: label,
            database,
            uptime_seconds: state.start_time.elapsed().as_secs(),
        },
    )
    .with_status(status)
    .into_response()
}

/// `GET /metrics`
pub async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    state.prometheus_handle.as_ref().map_or_else(
        || {
            (
                StatusCode::NOT_FOUND,
                "Metrics not enabled or failed to initialize",
            )
                .into_response()
        },
        |handle| handle.render().into_response(),
    )
}
