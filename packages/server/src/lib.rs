// Geo-Link Resolver - API Core
//
// This crate turns user-supplied Google Maps links into coordinates and a
// human-readable address, and serves that over HTTP.
// Resolution logic lives in domains/maps; external services sit behind kernel traits.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
