use tracing::{debug, info, warn};

use super::normalize::is_short_link;
use crate::kernel::BaseLinkExpander;

/// Expand `url` if it is a short link; on any failure keep the input.
pub async fn expand_if_short(expander: &dyn BaseLinkExpander, url: &str) -> String {
    if !is_short_link(url) {
        debug!(url = %url, "Not a short link, skipping expansion");
        return url.to_string();
    }

    match expander.expand(url).await {
        Ok(expanded) if !expanded.is_empty() => {
            info!(from = %url, to = %expanded, "Expanded short link");
            expanded
        }
        Ok(_) => url.to_string(),
        Err(e) => {
            warn!(error = %e, url = %url, "Failed to expand short link, using original URL");
            url.to_string()
        }
    }
}
