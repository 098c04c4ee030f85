//! Fallback resolvers for links whose text holds no coordinates.
//!
//! Both need a geocoder (an API key). Failures are logged and turn into `None`
//! so the caller moves on to the next strategy.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info, warn};

use super::url_text::{decode_address_text, decode_text, query_param};
use crate::domains::maps::models::Coordinates;
use crate::kernel::BaseGeocoder;

lazy_static! {
    static ref HEX_PLACE_ID: Regex = Regex::new(r"(?i)^0x[0-9a-f]+:0x[0-9a-f]+$").unwrap();
}

/// A place identifier found in a map link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceId {
    /// Internal `0x...:0x...` feature id; the public Places API cannot resolve it.
    Hex(String),
    /// Regular Places API identifier.
    Standard(String),
}

impl PlaceId {
    fn classify(raw: &str) -> Option<Self> {
        let id = decode_text(raw);
        if id.is_empty() {
            return None;
        }
        if HEX_PLACE_ID.is_match(&id) {
            Some(PlaceId::Hex(id))
        } else {
            Some(PlaceId::Standard(id))
        }
    }
}

/// The `q` parameter as free text, unless it is a bare coordinate pair.
pub fn extract_query_text(url: &str) -> Option<String> {
    query_param(url, "q").and_then(decode_address_text)
}

/// The `ftid` parameter, or else `place_id`.
pub fn extract_place_id(url: &str) -> Option<PlaceId> {
    query_param(url, "ftid")
        .or_else(|| query_param(url, "place_id"))
        .and_then(PlaceId::classify)
}

/// Forward-geocode the link's `q` text.
pub async fn geocode_query(geocoder: &dyn BaseGeocoder, url: &str) -> Option<Coordinates> {
    let query = extract_query_text(url)?;
    info!(query = %query, "Geocoding query parameter");

    match geocoder.geocode(&query).await {
        Ok(results) => {
            let coords = results
                .iter()
                .find_map(|r| r.geometry.as_ref())
                .map(|g| Coordinates::from(g.location));
            if coords.is_none() {
                debug!(query = %query, "Geocoding returned no geometry");
            }
            coords
        }
        Err(e) => {
            warn!(error = %e, query = %query, "Geocoding query parameter failed");
            None
        }
    }
}

/// Look up the link's place id with Place Details. Hex ids are never sent.
pub async fn resolve_place_id(geocoder: &dyn BaseGeocoder, url: &str) -> Option<Coordinates> {
    let id = match extract_place_id(url)? {
        PlaceId::Hex(id) => {
            debug!(place_id = %id, "Skipping hex feature id, not resolvable via Places API");
            return None;
        }
        PlaceId::Standard(id) => id,
    };

    info!(place_id = %id, "Resolving place id");

    match geocoder.place_details(&id, &["geometry"]).await {
        Ok(place) => place.geometry.map(|g| Coordinates::from(g.location)),
        Err(e) => {
            warn!(error = %e, place_id = %id, "Place details lookup failed");
            None
        }
    }
}
