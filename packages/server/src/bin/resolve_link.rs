//! CLI for resolving a single Google Maps link
//!
//! Runs the same pipeline as `POST /api/maps/expand-url` and prints the same
//! JSON envelope, so links can be checked without starting the server.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use server_core::domains::maps::GeoLinkResolver;
use server_core::kernel::{
    BaseGeocoder, BaseLinkExpander, GoogleMapsGeocoder, HttpLinkExpander, PassthroughLinkExpander,
};
use server_core::server::routes::ApiResponse;
use server_core::Config;

#[derive(Parser)]
#[command(name = "resolve_link")]
#[command(about = "Resolve a Google Maps link to coordinates and an address")]
struct Cli {
    /// Maps URL or short link
    url: String,

    /// Google Maps API key (defaults to GOOGLE_MAPS_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Do not follow short-link redirects
    #[arg(long)]
    no_expand: bool,
}

fn build_resolver(cli: &Cli, config: &Config) -> Result<GeoLinkResolver> {
    let expander: Arc<dyn BaseLinkExpander> = if cli.no_expand {
        Arc::new(PassthroughLinkExpander)
    } else {
        Arc::new(HttpLinkExpander::new(config.link_expand_timeout)?)
    };

    let api_key = cli
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| config.google_maps_api_key.clone());

    let geocoder = api_key
        .map(|key| Arc::new(GoogleMapsGeocoder::from_config(key, config)) as Arc<dyn BaseGeocoder>);

    Ok(GeoLinkResolver::new(expander, geocoder))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let resolver = build_resolver(&cli, &config)?;

    let (output, code) = match resolver.resolve(&cli.url).await {
        Ok(result) => (serde_json::to_string_pretty(&ApiResponse::ok(result))?, ExitCode::SUCCESS),
        Err(e) => (
            serde_json::to_string_pretty(&ApiResponse::failure(e.to_string()))?,
            ExitCode::FAILURE,
        ),
    };

    println!("{}", output);
    Ok(code)
}
