use serde::Serialize;
use thiserror::Error;

use super::Coordinates;

/// Outcome of resolving one map link.
///
/// `address` is best-effort: a result with coordinates and no address is still
/// a success.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
}

/// Caller-visible failures of link resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("URL is required.")]
    MissingUrl,

    #[error("Could not extract coordinates from URL. Please check the link format.")]
    CoordinatesNotFound,

    #[error("Failed to process URL")]
    Internal(#[from] anyhow::Error),
}

impl ResolveError {
    /// True for errors caused by the input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ResolveError::MissingUrl | ResolveError::CoordinatesNotFound
        )
    }
}
