//! Maps domain - turns Google Maps links into coordinates and an address.
//!
//! Resolution is a linear pipeline: normalize, expand short links, extract
//! coordinates from the URL text, fall back to geocoding / place lookups, then
//! resolve a human-readable address. Every network stage degrades to the next
//! strategy instead of failing the request.

pub mod activities;
pub mod models;

pub use activities::GeoLinkResolver;
pub use models::*;
