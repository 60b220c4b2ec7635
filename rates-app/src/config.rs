//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// Override for the NBP endpoint; production URL when unset.
    pub nbp_api_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let nbp_api_url = env::var("NBP_API_URL").ok();

        Ok(Self { port, nbp_api_url })
    }
}
