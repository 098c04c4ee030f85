//! Pure Google Maps Platform REST client.
//!
//! A minimal client for the Geocoding and Place Details web services. It knows
//! nothing about map links or how callers combine these calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use google_maps_client::GoogleMapsClient;
//!
//! let client = GoogleMapsClient::new(api_key).with_timeout(Duration::from_secs(5));
//!
//! let results = client.geocode("Patong Beach, Phuket").await?;
//! let addresses = client.reverse_geocode(7.8961, 98.2964, "en").await?;
//! let place = client.place_details("ChIJN1t_tDeuEmsRUsoyG83frY4", &["geometry"]).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{MapsError, Result};
pub use types::*;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

const BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Per-request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Google Maps Platform client.
#[derive(Clone)]
pub struct GoogleMapsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for GoogleMapsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleMapsClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GoogleMapsClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (proxies, local stubs).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the default 10 s per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward geocoding: free-text address to candidate results.
    ///
    /// `ZERO_RESULTS` is not an error and yields an empty list.
    #[instrument(skip(self))]
    pub async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>> {
        let response: GeocodeResponse = self
            .get_json("geocode/json", &[("address", address)])
            .await?;
        into_results(response)
    }

    /// Reverse geocoding: coordinates to candidate addresses in `language`.
    #[instrument(skip(self))]
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
        language: &str,
    ) -> Result<Vec<GeocodeResult>> {
        let latlng = format!("{},{}", lat, lng);
        let response: GeocodeResponse = self
            .get_json(
                "geocode/json",
                &[("latlng", latlng.as_str()), ("language", language)],
            )
            .await?;
        into_results(response)
    }

    /// Place Details restricted to `fields` (e.g. `["geometry"]`).
    #[instrument(skip(self))]
    pub async fn place_details(&self, place_id: &str, fields: &[&str]) -> Result<PlaceResult> {
        let fields = fields.join(",");
        let response: PlaceDetailsResponse = self
            .get_json(
                "place/details/json",
                &[("place_id", place_id), ("fields", fields.as_str())],
            )
            .await?;

        if response.status != STATUS_OK {
            return Err(MapsError::Status {
                status: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }

        response
            .result
            .ok_or_else(|| MapsError::Parse("Place details response had no result".into()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        if self.api_key.trim().is_empty() {
            return Err(MapsError::Config("API key is empty".into()));
        }

        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "Calling Google Maps API");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, "Google Maps API returned non-success status");
            return Err(MapsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| MapsError::Parse(format!("Failed to deserialize response: {}", e)))
    }
}

fn into_results(response: GeocodeResponse) -> Result<Vec<GeocodeResult>> {
    match response.status.as_str() {
        STATUS_OK => Ok(response.results),
        STATUS_ZERO_RESULTS => Ok(Vec::new()),
        _ => Err(MapsError::Status {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        }),
    }
}
