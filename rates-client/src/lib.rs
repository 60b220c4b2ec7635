//! # Rates Client SDK
//!
//! A typed Rust client for the rates gateway API.

use rates_types::{ErrorResponse, RatesResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rates gateway API client.
pub struct RatesClient {
    base_url: String,
    http: Client,
}

impl RatesClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the gateway is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches normalized rates for the given currency codes.
    ///
    /// `date` empty means most recent; `provider` empty means the gateway
    /// default.
    pub async fn get_currencies(
        &self,
        codes: &[&str],
        date: &str,
        provider: &str,
    ) -> Result<RatesResponse, ClientError> {
        let mut query: Vec<(&str, String)> = vec![("codes", codes.join(","))];
        if !date.is_empty() {
            query.push(("date", date.to_string()));
        }
        if !provider.is_empty() {
            query.push(("provider", provider.to_string()));
        }

        let resp = self
            .http
            .get(format!("{}/currencies", self.base_url))
            .query(&query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|err| match err.details {
                    Some(details) => format!("{}: {details}", err.message),
                    None => err.message,
                })
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
