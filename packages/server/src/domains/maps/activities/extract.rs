//! Coordinate extraction from map URLs.
//!
//! Rules are tried in order and the first match wins. More specific rules come
//! before looser ones that could misfire on the same URL.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domains::maps::models::Coordinates;

/// A named coordinate rule with a `(lat, lng)` capture pair.
pub struct CoordinatePattern {
    pub name: &'static str,
    regex: Regex,
}

impl CoordinatePattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// Apply this rule to `url`; a capture that does not parse counts as no match.
    pub fn extract(&self, url: &str) -> Option<Coordinates> {
        let caps = self.regex.captures(url)?;
        Coordinates::parse(caps.get(1)?.as_str(), caps.get(2)?.as_str())
    }
}

/// Name reported for the `@`-split rule that runs after every regex rule.
pub const LAST_AT_SEGMENT_RULE: &str = "last_at_segment";

lazy_static! {
    /// Ordered coordinate rules. Order is significant.
    pub static ref COORDINATE_PATTERNS: Vec<CoordinatePattern> = vec![
        // @lat,lng,1234m (distance zoom)
        CoordinatePattern::new("at_meters", r"@(-?\d+\.?\d*),(-?\d+\.?\d*),(\d+)m"),
        // @lat,lng,17z / 15.5z (zoom level)
        CoordinatePattern::new("at_zoom", r"@(-?\d+\.?\d*),(-?\d+\.?\d*),(\d+\.?\d*)z"),
        // /search/lat,lng or /search/lat,+lng
        CoordinatePattern::new("search_path", r"/search/(-?\d+\.?\d*),\+?(-?\d+\.?\d*)"),
        // @lat,lng, followed by any zoom form
        CoordinatePattern::new("at_trailing_comma", r"@(-?\d+\.?\d*),(-?\d+\.?\d*),"),
        // @lat,lng at end of string or before , ? &
        CoordinatePattern::new("at_bare", r"@(-?\d+\.?\d*),(-?\d+\.?\d*)(?:$|[,?&])"),
        CoordinatePattern::new("q_param", r"[?&]q=(-?\d+\.?\d*),(-?\d+\.?\d*)"),
        CoordinatePattern::new("place_at", r"/place/[^/]+/@(-?\d+\.?\d*),(-?\d+\.?\d*)"),
        CoordinatePattern::new("ll_param", r"[?&]ll=(-?\d+\.?\d*),(-?\d+\.?\d*)"),
        CoordinatePattern::new("center_param", r"[?&]center=(-?\d+\.?\d*),(-?\d+\.?\d*)"),
        // data blob marker pair !3d<lat>...!4d<lng>
        CoordinatePattern::new("data_marker", r"!3d(-?\d+\.?\d*).*?!4d(-?\d+\.?\d*)"),
        // Shadowed by data_marker above: any URL matching this matched that first
        CoordinatePattern::new(
            "data_segment_marker",
            r"/data=[^/?]*?!3d(-?\d+\.?\d*)[^/?]*?!4d(-?\d+\.?\d*)",
        ),
    ];

    static ref LEADING_PAIR: Regex = Regex::new(r"^(-?\d+\.?\d*),(-?\d+\.?\d*)").unwrap();
}

/// Last resort: the text after the final `@`, if it starts with `<number>,<number>`.
fn extract_last_at_segment(url: &str) -> Option<Coordinates> {
    if !url.contains('@') {
        return None;
    }
    let segment = url.rsplit('@').next()?;
    let caps = LEADING_PAIR.captures(segment)?;
    Coordinates::parse(caps.get(1)?.as_str(), caps.get(2)?.as_str())
}

/// Extract coordinates and report which rule matched.
pub fn extract_coordinates_with_rule(url: &str) -> Option<(&'static str, Coordinates)> {
    COORDINATE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.extract(url).map(|coords| (pattern.name, coords)))
        .or_else(|| extract_last_at_segment(url).map(|coords| (LAST_AT_SEGMENT_RULE, coords)))
}

/// Extract coordinates from the URL text alone. No network calls.
pub fn extract_coordinates(url: &str) -> Option<Coordinates> {
    extract_coordinates_with_rule(url).map(|(_, coords)| coords)
}
