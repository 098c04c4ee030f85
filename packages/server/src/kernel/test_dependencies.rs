// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into GeoLinkResolver / ServerDeps for tests.
// Mocks are Clone and share their recorded calls, so a test can keep a handle
// after moving a copy into the resolver.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use google_maps_client::{GeocodeResult, Geometry, LatLng, PlaceResult};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseGeocoder, BaseLinkExpander};

// =============================================================================
// Mock Link Expander
// =============================================================================

#[derive(Clone, Default)]
pub struct MockLinkExpander {
    response: Arc<Mutex<Option<std::result::Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl MockLinkExpander {
    /// Without a configured response the expander echoes its input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every short link to `url`
    pub fn with_redirect(self, url: &str) -> Self {
        *self.response.lock().unwrap() = Some(Ok(url.to_string()));
        self
    }

    /// Fail every expansion with `message`
    pub fn with_error(self, message: &str) -> Self {
        *self.response.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    /// Sleep for `delay` before answering each expansion
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all URLs that were expanded
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseLinkExpander for MockLinkExpander {
    async fn expand(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        pause(self.delay).await;

        match self.response.lock().unwrap().clone() {
            Some(Ok(expanded)) => Ok(expanded),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(url.to_string()),
        }
    }
}

// =============================================================================
// Mock Geocoder
// =============================================================================

type Canned<T> = Arc<Mutex<Option<std::result::Result<T, String>>>>;

/// Arguments captured from a place details call
pub type PlaceCall = (String, Vec<String>);

/// Arguments captured from a reverse geocoding call
pub type ReverseCall = (f64, f64, String);

#[derive(Clone, Default)]
pub struct MockGeocoder {
    geocode_response: Canned<Vec<GeocodeResult>>,
    place_response: Canned<PlaceResult>,
    reverse_response: Canned<Vec<GeocodeResult>>,
    geocode_calls: Arc<Mutex<Vec<String>>>,
    place_calls: Arc<Mutex<Vec<PlaceCall>>>,
    reverse_calls: Arc<Mutex<Vec<ReverseCall>>>,
    delay: Option<Duration>,
}

async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

fn located(lat: f64, lng: f64) -> Geometry {
    Geometry {
        location: LatLng { lat, lng },
        location_type: None,
    }
}

fn canned<T: Clone>(slot: &Canned<T>, default: impl FnOnce() -> Result<T>) -> Result<T> {
    match slot.lock().unwrap().clone() {
        Some(Ok(value)) => Ok(value),
        Some(Err(status)) => Err(anyhow!("Maps API returned {}", status)),
        None => default(),
    }
}

impl MockGeocoder {
    /// Unconfigured calls return no results (place details: NOT_FOUND).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geocode_results(self, results: Vec<GeocodeResult>) -> Self {
        *self.geocode_response.lock().unwrap() = Some(Ok(results));
        self
    }

    /// Forward geocoding returns one result at (lat, lng)
    pub fn with_geocode_location(self, lat: f64, lng: f64) -> Self {
        self.with_geocode_results(vec![GeocodeResult {
            geometry: Some(located(lat, lng)),
            ..Default::default()
        }])
    }

    /// Forward geocoding fails with the given API status
    pub fn with_geocode_error(self, status: &str) -> Self {
        *self.geocode_response.lock().unwrap() = Some(Err(status.to_string()));
        self
    }

    pub fn with_place_location(self, lat: f64, lng: f64) -> Self {
        *self.place_response.lock().unwrap() = Some(Ok(PlaceResult {
            geometry: Some(located(lat, lng)),
            ..Default::default()
        }));
        self
    }

    pub fn with_place_error(self, status: &str) -> Self {
        *self.place_response.lock().unwrap() = Some(Err(status.to_string()));
        self
    }

    pub fn with_reverse_results(self, results: Vec<GeocodeResult>) -> Self {
        *self.reverse_response.lock().unwrap() = Some(Ok(results));
        self
    }

    /// Reverse geocoding returns one result with this formatted address
    pub fn with_reverse_address(self, address: &str) -> Self {
        self.with_reverse_results(vec![GeocodeResult {
            formatted_address: Some(address.to_string()),
            ..Default::default()
        }])
    }

    pub fn with_reverse_error(self, status: &str) -> Self {
        *self.reverse_response.lock().unwrap() = Some(Err(status.to_string()));
        self
    }

    /// Get all addresses sent to forward geocoding
    pub fn geocode_calls(&self) -> Vec<String> {
        self.geocode_calls.lock().unwrap().clone()
    }

    /// Get all place details calls (place id, fields)
    pub fn place_calls(&self) -> Vec<PlaceCall> {
        self.place_calls.lock().unwrap().clone()
    }

    /// Get all reverse geocoding calls (lat, lng, language)
    pub fn reverse_calls(&self) -> Vec<ReverseCall> {
        self.reverse_calls.lock().unwrap().clone()
    }

    /// Total number of outbound calls of any kind
    /// Sleep for `delay` before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.geocode_calls().len() + self.place_calls().len() + self.reverse_calls().len()
    }
}

#[async_trait]
impl BaseGeocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>> {
        self.geocode_calls.lock().unwrap().push(address.to_string());
        pause(self.delay).await;
        canned(&self.geocode_response, || Ok(Vec::new()))
    }

    async fn place_details(&self, place_id: &str, fields: &[&str]) -> Result<PlaceResult> {
        self.place_calls.lock().unwrap().push((
            place_id.to_string(),
            fields.iter().map(|f| f.to_string()).collect(),
        ));
        pause(self.delay).await;
        canned(&self.place_response, || Err(anyhow!("Maps API returned NOT_FOUND")))
    }

    async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
        language: &str,
    ) -> Result<Vec<GeocodeResult>> {
        self.reverse_calls
            .lock()
            .unwrap()
            .push((lat, lng, language.to_string()));
        pause(self.delay).await;
        canned(&self.reverse_response, || Ok(Vec::new()))
    }
}
