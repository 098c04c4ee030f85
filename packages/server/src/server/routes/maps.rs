//! Maps link endpoint.
//!
//! POST /api/maps/expand-url
//!
//! Body: `{ "url": "<google maps link>" }`. Responds with coordinates and a
//! best-effort address, or a `{ success: false, message }` envelope.

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domains::maps::{ResolutionResult, ResolveError};
use crate::server::app::AxumAppState;

/// Outer bound on one resolution. It sits above the four sequential outbound
/// calls (expansion, geocode, place details, reverse geocode) of up to 10 s each,
/// so a request that degrades step by step still gets its answer.
pub const RESOLVE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
pub struct ExpandUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Response envelope shared by success and failure responses
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

/// Resolve a Google Maps link to coordinates and an address.
///
/// A malformed or missing body is treated the same as a missing `url`.
/// Panics inside the resolver, and resolutions that outlive `RESOLVE_TIMEOUT`,
/// are reported as a generic 500.
pub async fn expand_url_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<ExpandUrlRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ResolutionResult>>, ResolveError> {
    let url = match payload {
        Ok(Json(ExpandUrlRequest { url: Some(url) })) if !url.trim().is_empty() => url,
        Ok(_) => return Err(ResolveError::MissingUrl),
        Err(rejection) => {
            warn!(error = %rejection, "Rejected expand-url request body");
            return Err(ResolveError::MissingUrl);
        }
    };

    let resolver = state.deps.resolver.clone();

    let resolution = AssertUnwindSafe(resolver.resolve(&url)).catch_unwind();

    match tokio::time::timeout(RESOLVE_TIMEOUT, resolution).await {
        Ok(Ok(Ok(result))) => Ok(Json(ApiResponse::ok(result))),
        Ok(Ok(Err(e))) => {
            if let ResolveError::Internal(inner) = &e {
                error!(error = %inner, url = %url, "Error processing maps URL");
            }
            Err(e)
        }
        Ok(Err(_)) => {
            error!(url = %url, "Maps URL resolution panicked");
            Err(ResolveError::Internal(anyhow::anyhow!(
                "resolver panicked"
            )))
        }
        Err(_) => {
            error!(
                url = %url,
                timeout_secs = RESOLVE_TIMEOUT.as_secs(),
                "Maps URL resolution timed out"
            );
            Err(ResolveError::Internal(anyhow::anyhow!(
                "resolution timed out"
            )))
        }
    }
}
