//! HTTP link expander - follows short-link redirects with reqwest.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::BaseLinkExpander;

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 10;

/// Short links answer bots differently, so present as a desktop browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Follows redirects with a single GET and reports the final URL.
///
/// The response status is ignored: a 404 at the end of the chain still has
/// the canonical URL we are after.
pub struct HttpLinkExpander {
    client: reqwest::Client,
}

impl HttpLinkExpander {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BaseLinkExpander for HttpLinkExpander {
    async fn expand(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Redirect request failed for {}", url))?;

        debug!(status = %response.status(), final_url = %response.url(), "Short link resolved");

        Ok(response.url().to_string())
    }
}

/// Returns every URL unchanged. Used when redirects must not be followed.
pub struct PassthroughLinkExpander;

#[async_trait]
impl BaseLinkExpander for PassthroughLinkExpander {
    async fn expand(&self, url: &str) -> Result<String> {
        Ok(url.to_string())
    }
}
