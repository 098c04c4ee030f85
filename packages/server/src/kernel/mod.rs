//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod google_maps;
pub mod link_expander;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use google_maps::GoogleMapsGeocoder;
pub use link_expander::{HttpLinkExpander, PassthroughLinkExpander, MAX_REDIRECTS};
pub use test_dependencies::{MockGeocoder, MockLinkExpander};
pub use traits::*;
