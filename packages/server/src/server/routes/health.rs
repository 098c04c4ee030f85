use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    geocoding: String,
}

/// Health check endpoint
///
/// The resolver holds no connections, so this only reports whether the
/// geocoding fallbacks are configured. Always 200 OK.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let geocoding = if state.deps.geocoding_enabled() {
        "configured"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            geocoding: geocoding.to_string(),
        }),
    )
}
