//! Human-readable address for resolved coordinates.
//!
//! Reverse geocoding is preferred; the URL text is the fallback. Both are
//! best-effort and a missing address never fails a resolution.

use google_maps_client::{AddressComponent, GeocodeResult};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::url_text::{decode_address_text, query_param};
use crate::domains::maps::models::Coordinates;
use crate::kernel::BaseGeocoder;

/// Addresses are stored in one language regardless of the caller's locale.
pub const ADDRESS_LANGUAGE: &str = "en";

lazy_static! {
    static ref PLACE_SEGMENT: Regex = Regex::new(r"/place/([^/?#]+)").unwrap();
    static ref SEARCH_SEGMENT: Regex = Regex::new(r"/search/([^/?#]+)").unwrap();
}

fn component<'a>(components: &'a [AddressComponent], kind: &str) -> Option<&'a str> {
    components
        .iter()
        .find(|c| c.has_type(kind))
        .map(|c| c.long_name.as_str())
        .filter(|name| !name.trim().is_empty())
}

/// Build `"{number} {route}, neighborhood, locality, admin1, postal, country"`
/// from structured components, skipping absent parts.
pub fn format_address_components(components: &[AddressComponent]) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    match (
        component(components, "street_number"),
        component(components, "route"),
    ) {
        (Some(number), Some(route)) => parts.push(format!("{} {}", number, route)),
        (None, Some(route)) => parts.push(route.to_string()),
        _ => {}
    }

    let locality = component(components, "locality")
        .or_else(|| component(components, "administrative_area_level_2"));

    for part in [
        component(components, "neighborhood"),
        locality,
        component(components, "administrative_area_level_1"),
        component(components, "postal_code"),
        component(components, "country"),
    ]
    .into_iter()
    .flatten()
    {
        parts.push(part.to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn address_from_result(result: &GeocodeResult) -> Option<String> {
    result
        .formatted_address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .or_else(|| format_address_components(&result.address_components))
}

/// Reverse-geocode `coords` in English. Errors and non-OK statuses give `None`.
pub async fn reverse_geocode_address(
    geocoder: &dyn BaseGeocoder,
    coords: Coordinates,
) -> Option<String> {
    match geocoder
        .reverse_geocode(coords.latitude, coords.longitude, ADDRESS_LANGUAGE)
        .await
    {
        Ok(results) => {
            let address = results.first().and_then(address_from_result);
            if address.is_none() {
                debug!(coords = %coords, "Reverse geocoding returned no usable address");
            }
            address
        }
        Err(e) => {
            warn!(error = %e, coords = %coords, "Reverse geocoding failed");
            None
        }
    }
}

/// Address-like text from the link itself: `/place/`, then `/search/`, then `q=`.
pub fn extract_address_from_url(url: &str) -> Option<String> {
    let segment = |re: &Regex| {
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| decode_address_text(m.as_str()))
    };

    segment(&PLACE_SEGMENT)
        .or_else(|| segment(&SEARCH_SEGMENT))
        .or_else(|| query_param(url, "q").and_then(decode_address_text))
}

/// Reverse geocoding when possible, else the URL text.
pub async fn resolve_address(
    geocoder: Option<&dyn BaseGeocoder>,
    coords: Option<Coordinates>,
    url: &str,
) -> Option<String> {
    if let (Some(geocoder), Some(coords)) = (geocoder, coords) {
        if let Some(address) = reverse_geocode_address(geocoder, coords).await {
            return Some(address);
        }
    }
    extract_address_from_url(url)
}
