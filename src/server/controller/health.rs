use axum::{http::StatusCode, response::IntoResponse};

/// Body returned by the liveness endpoint.
pub const ONLINE_MESSAGE: &str = "Bot is online!";

/// Liveness check for external uptime monitors.
///
/// Always answers 200; it reports that the process is up, not that the gateway
/// connection is healthy.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, ONLINE_MESSAGE)
}
