//! Health check endpoint.
//!
//! Used by load balancers and container probes. The converter has no
//! dependencies to probe, so serving a response is the whole check.

use axum::response::IntoResponse;

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    "OK"
}
