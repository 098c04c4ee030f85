// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Link resolution logic lives in domains/maps and only talks to these traits.
//
// Naming convention: Base* for trait names (e.g., BaseGeocoder, BaseLinkExpander)

use anyhow::Result;
use async_trait::async_trait;
use google_maps_client::{GeocodeResult, PlaceResult};

// =============================================================================
// Link Expander Trait (Infrastructure - HTTP redirects)
// =============================================================================

#[async_trait]
pub trait BaseLinkExpander: Send + Sync {
    /// Follow redirects from `url` and return the final URL.
    async fn expand(&self, url: &str) -> Result<String>;
}

// =============================================================================
// Geocoder Trait (Infrastructure - Google Maps Platform)
// =============================================================================

#[async_trait]
pub trait BaseGeocoder: Send + Sync {
    /// Forward geocoding of a free-text address
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>>;

    /// Place details restricted to the requested fields
    async fn place_details(&self, place_id: &str, fields: &[&str]) -> Result<PlaceResult>;

    /// Reverse geocoding of a coordinate pair in the given language
    async fn reverse_geocode(&self, lat: f64, lng: f64, language: &str)
        -> Result<Vec<GeocodeResult>>;
}
