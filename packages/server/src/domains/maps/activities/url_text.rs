//! Free-text values pulled out of map URLs (query parameters, path segments).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BARE_COORDINATE_PAIR: Regex =
        Regex::new(r"^-?\d+\.?\d*,\s*-?\d+\.?\d*$").unwrap();
}

/// True if the value is just `lat,lng` and not usable as an address.
pub fn is_bare_coordinate_pair(value: &str) -> bool {
    BARE_COORDINATE_PAIR.is_match(value)
}

/// Value of query parameter `name` (matched after `?` or `&`), still encoded.
pub fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    url.match_indices(name).find_map(|(idx, _)| {
        let before = url[..idx].chars().last()?;
        if before != '?' && before != '&' {
            return None;
        }
        let rest = url[idx + name.len()..].strip_prefix('=')?;
        let end = rest.find(['&', '#']).unwrap_or(rest.len());
        Some(&rest[..end]).filter(|value| !value.is_empty())
    })
}

/// Percent-decode, turn `+` into spaces and trim.
///
/// Invalid percent-encoding falls back to the raw text.
pub fn decode_text(raw: &str) -> String {
    let decoded = urlencoding::decode(raw)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    decoded.replace('+', " ").trim().to_string()
}

/// Decode a candidate address, rejecting empty values and bare coordinate pairs.
pub fn decode_address_text(raw: &str) -> Option<String> {
    let text = decode_text(raw);
    if text.is_empty() || is_bare_coordinate_pair(&text) {
        return None;
    }
    Some(text)
}
