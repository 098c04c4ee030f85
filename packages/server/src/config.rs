use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Google Maps Platform key; `None` disables all geocoding calls
    pub google_maps_api_key: Option<String>,
    /// Override for the Maps web services base URL (proxies, local stubs)
    pub maps_api_base_url: Option<String>,
    /// CORS origins; empty means any origin
    pub allowed_origins: Vec<String>,
    pub link_expand_timeout: Duration,
    /// Per-request timeout for each Maps web service call
    pub maps_api_timeout: Duration,
}

/// Read an optional variable, treating blank values as unset.
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            google_maps_api_key: optional_var("GOOGLE_MAPS_API_KEY"),
            maps_api_base_url: optional_var("MAPS_API_BASE_URL"),
            allowed_origins: optional_var("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            link_expand_timeout: Duration::from_secs(
                env::var("LINK_EXPAND_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("LINK_EXPAND_TIMEOUT_SECS must be a valid number")?,
            ),
            maps_api_timeout: Duration::from_secs(
                env::var("MAPS_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("MAPS_API_TIMEOUT_SECS must be a valid number")?,
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            google_maps_api_key: None,
            maps_api_base_url: None,
            allowed_origins: Vec::new(),
            link_expand_timeout: Duration::from_secs(10),
            maps_api_timeout: Duration::from_secs(10),
        }
    }
}
