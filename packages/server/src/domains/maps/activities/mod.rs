//! Maps domain activities - the resolution pipeline stages.

pub mod address;
pub mod expand;
pub mod extract;
pub mod fallback;
pub mod normalize;
pub mod resolve;
pub mod url_text;

pub use address::{extract_address_from_url, format_address_components, resolve_address};
pub use expand::expand_if_short;
pub use extract::{extract_coordinates, extract_coordinates_with_rule};
pub use fallback::{extract_place_id, extract_query_text, PlaceId};
pub use normalize::{is_short_link, normalize_url};
pub use resolve::GeoLinkResolver;
