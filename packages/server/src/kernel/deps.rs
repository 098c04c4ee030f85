//! Server dependencies for route handlers (using traits for testability)
//!
//! This module provides the central dependency container used by the HTTP layer.
//! All external services use trait abstractions to enable testing.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domains::maps::GeoLinkResolver;
use crate::kernel::{BaseGeocoder, BaseLinkExpander, GoogleMapsGeocoder, HttpLinkExpander};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub resolver: Arc<GeoLinkResolver>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        link_expander: Arc<dyn BaseLinkExpander>,
        geocoder: Option<Arc<dyn BaseGeocoder>>,
    ) -> Self {
        Self {
            resolver: Arc::new(GeoLinkResolver::new(link_expander, geocoder)),
        }
    }

    /// Build production dependencies from configuration.
    ///
    /// Without `GOOGLE_MAPS_API_KEY` no geocoder is created and only URL-text
    /// extraction is available.
    pub fn from_config(config: &Config) -> Result<Self> {
        let link_expander: Arc<dyn BaseLinkExpander> =
            Arc::new(HttpLinkExpander::new(config.link_expand_timeout)?);

        let geocoder: Option<Arc<dyn BaseGeocoder>> =
            config.google_maps_api_key.as_ref().map(|key| {
                Arc::new(GoogleMapsGeocoder::from_config(key.clone(), config))
                    as Arc<dyn BaseGeocoder>
            });

        if geocoder.is_none() {
            info!("GOOGLE_MAPS_API_KEY not set, geocoding fallbacks disabled");
        }

        Ok(Self::new(link_expander, geocoder))
    }

    pub fn geocoding_enabled(&self) -> bool {
        self.resolver.has_geocoder()
    }
}
