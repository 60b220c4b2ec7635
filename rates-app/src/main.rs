//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the immutable provider registry
//! - Create the rates service
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_hex::{ProviderRegistry, RatesService, inbound::HttpServer};
use rates_providers::NbpProvider;
use rates_types::RateProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_app=debug,rates_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting rates gateway on port {}", config.port);

    let nbp = match &config.nbp_api_url {
        Some(url) => {
            tracing::info!("Using NBP endpoint override: {}", url);
            NbpProvider::with_base_url(url)
        }
        None => NbpProvider::new(),
    };

    // Registry is built once here and stays immutable for the process lifetime.
    let registry = ProviderRegistry::new([Arc::new(nbp) as Arc<dyn RateProvider>]);
    let service = RatesService::new(registry);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
