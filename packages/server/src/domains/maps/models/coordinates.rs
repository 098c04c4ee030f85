use serde::{Deserialize, Serialize};

/// A point extracted from a map link.
///
/// No range validation happens here: a malformed link can yield values outside
/// `±90` / `±180` and they are passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a captured `(lat, lng)` text pair with the locale-independent float parser.
    pub fn parse(lat: &str, lng: &str) -> Option<Self> {
        let latitude = lat.trim().parse::<f64>().ok()?;
        let longitude = lng.trim().parse::<f64>().ok()?;
        Some(Self::new(latitude, longitude))
    }
}

impl From<google_maps_client::LatLng> for Coordinates {
    fn from(location: google_maps_client::LatLng) -> Self {
        Self::new(location.lat, location.lng)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
