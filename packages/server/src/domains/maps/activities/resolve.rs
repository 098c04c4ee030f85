use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::{
    address::resolve_address,
    expand::expand_if_short,
    extract::extract_coordinates_with_rule,
    fallback::{geocode_query, resolve_place_id},
    normalize::normalize_url,
};
use crate::domains::maps::models::{Coordinates, ResolutionResult, ResolveError};
use crate::kernel::{BaseGeocoder, BaseLinkExpander};

/// Resolves map links to coordinates and an optional address.
///
/// Stateless: one instance is shared by every request. `geocoder` is `None`
/// when no Maps API key is configured, which disables the geocoding fallbacks
/// and reverse geocoding.
#[derive(Clone)]
pub struct GeoLinkResolver {
    expander: Arc<dyn BaseLinkExpander>,
    geocoder: Option<Arc<dyn BaseGeocoder>>,
}

impl GeoLinkResolver {
    pub fn new(
        expander: Arc<dyn BaseLinkExpander>,
        geocoder: Option<Arc<dyn BaseGeocoder>>,
    ) -> Self {
        Self { expander, geocoder }
    }

    pub fn has_geocoder(&self) -> bool {
        self.geocoder.is_some()
    }

    /// Run the full pipeline for one user-supplied link.
    #[instrument(skip(self))]
    pub async fn resolve(&self, raw_url: &str) -> Result<ResolutionResult, ResolveError> {
        if raw_url.trim().is_empty() {
            return Err(ResolveError::MissingUrl);
        }

        let normalized = normalize_url(raw_url);
        let url = expand_if_short(self.expander.as_ref(), &normalized).await;

        let coordinates = match extract_coordinates_with_rule(&url) {
            Some((rule, coords)) => {
                info!(rule, coords = %coords, "Extracted coordinates from URL");
                Some(coords)
            }
            None => self.fallback_coordinates(&url).await,
        };

        let Some(coordinates) = coordinates else {
            warn!(url = %url, "Could not extract coordinates");
            return Err(ResolveError::CoordinatesNotFound);
        };

        let address = resolve_address(self.geocoder.as_deref(), Some(coordinates), &url).await;

        Ok(ResolutionResult {
            coordinates: Some(coordinates),
            address,
        })
    }

    async fn fallback_coordinates(&self, url: &str) -> Option<Coordinates> {
        let Some(geocoder) = self.geocoder.as_deref() else {
            info!("No Maps API key configured, skipping geocoding fallbacks");
            return None;
        };

        if let Some(coords) = geocode_query(geocoder, url).await {
            return Some(coords);
        }
        resolve_place_id(geocoder, url).await
    }
}
