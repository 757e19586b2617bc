//! HTTP server for address-to-boundary lookups.
//!
//! Geocodes an address with Nominatim, then queries each configured ArcGIS
//! boundary layer for the polygon containing the point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use districts::api::{create_router, AppState};
use districts::arcgis::ArcGisClient;
use districts::config::Config;
use districts::geocoder::NominatimGeocoder;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "serve")]
#[command(about = "Legislative boundary lookup server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// User agent sent to upstream services (overrides config)
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(user_agent) = args.user_agent {
        config.upstream.user_agent = user_agent;
    }

    let registry = config.registry().context("Invalid dataset configuration")?;
    info!("Loaded {} boundary datasets", registry.len());

    let nominatim_url = Url::parse(&config.upstream.nominatim_url)
        .context("Invalid Nominatim URL")?;
    info!(
        "Geocoding with {} as {:?}",
        nominatim_url, config.upstream.user_agent
    );

    let geocoder = NominatimGeocoder::new(
        &nominatim_url,
        &config.upstream.user_agent,
        config.upstream.timeout(),
    )?;
    let boundaries = ArcGisClient::new(&config.upstream.user_agent, config.upstream.timeout())?;

    let app = create_router(AppState {
        geocoder: Arc::new(geocoder),
        boundaries: Arc::new(boundaries),
        registry: Arc::new(registry),
    });

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
