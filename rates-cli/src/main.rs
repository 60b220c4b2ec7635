//! Rates CLI
//!
//! Command-line interface for the rates gateway API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use rates_client::RatesClient;

#[derive(Parser)]
#[command(name = "rates")]
#[command(author, version, about = "Rates gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the rates gateway
    #[arg(long, env = "RATES_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch exchange rates for a set of currency codes
    Currencies {
        /// Comma-separated currency codes
        #[arg(long, default_value = "USD,EUR")]
        codes: String,
        /// As-of date (YYYY-MM-DD); omitted means most recent
        #[arg(long, default_value = "")]
        date: String,
        /// Provider name
        #[arg(long, default_value = "nbp")]
        provider: String,
    },
    /// Check gateway health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = RatesClient::new(&cli.api_url);

    match cli.command {
        Commands::Currencies {
            codes,
            date,
            provider,
        } => {
            let codes: Vec<&str> = codes.split(',').map(str::trim).collect();
            let response = client.get_currencies(&codes, &date, &provider).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Health => {
            let healthy = client.health().await?;
            println!("{}", if healthy { "healthy" } else { "unhealthy" });
        }
    }

    Ok(())
}
