//! GoogleMapsClient adapter (implements BaseGeocoder trait)

use anyhow::Result;
use async_trait::async_trait;
use google_maps_client::{GeocodeResult, GoogleMapsClient, PlaceResult};

use tracing::info;

use super::BaseGeocoder;
use crate::config::Config;

/// Wrapper around GoogleMapsClient that implements BaseGeocoder trait
pub struct GoogleMapsGeocoder(pub GoogleMapsClient);

impl GoogleMapsGeocoder {
    /// Client for `api_key` with the base URL override and call timeout from config.
    pub fn from_config(api_key: impl Into<String>, config: &Config) -> Self {
        let mut client = GoogleMapsClient::new(api_key).with_timeout(config.maps_api_timeout);
        if let Some(base_url) = &config.maps_api_base_url {
            client = client.with_base_url(base_url.clone());
        }
        info!(
            base_url = client.base_url(),
            timeout_secs = config.maps_api_timeout.as_secs(),
            "Google Maps geocoding enabled"
        );
        Self(client)
    }
}

#[async_trait]
impl BaseGeocoder for GoogleMapsGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>> {
        self.0
            .geocode(address)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    async fn place_details(&self, place_id: &str, fields: &[&str]) -> Result<PlaceResult> {
        self.0
            .place_details(place_id, fields)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
        language: &str,
    ) -> Result<Vec<GeocodeResult>> {
        self.0
            .reverse_geocode(lat, lng, language)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}
