//! NBP (National Bank of Poland) upstream client.
//!
//! Speaks the NBP exchange-rate tables API: a dated table of mid rates is
//! published as a one-element JSON array, and appending `/{date}` to the
//! table endpoint selects a historical snapshot.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::header;
use serde::Deserialize;

use rates_types::{ProviderError, RateProvider, RateValue, RatesResponse, validate};

const NBP_API_URL: &str = "https://api.nbp.pl/api/exchangerates/tables/a";
const NBP_DATE_FORMAT: &str = "%Y-%m-%d";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("rates-gateway/", env!("CARGO_PKG_VERSION"));

/// One dated rate table as published by NBP.
///
/// Transient wire shape: parsed from the upstream payload, discarded after
/// filtering, never exposed to callers.
#[derive(Debug, Deserialize)]
struct NbpTable {
    table: String,
    no: String,
    #[serde(rename = "effectiveDate")]
    effective_date: String,
    rates: Vec<NbpRate>,
}

#[derive(Debug, Deserialize)]
struct NbpRate {
    currency: String,
    code: String,
    mid: f64,
}

/// Rate provider backed by the NBP tables API.
///
/// Holds only read-only configuration; concurrent calls share the underlying
/// `reqwest` connection pool and need no coordination.
pub struct NbpProvider {
    name: &'static str,
    base_url: String,
    date_format: &'static str,
    http: reqwest::Client,
}

impl NbpProvider {
    /// Creates a provider against the production NBP endpoint.
    pub fn new() -> Self {
        Self::with_base_url(NBP_API_URL)
    }

    /// Creates a provider against an alternate endpoint (used in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            name: "NBP",
            base_url: base_url.into().trim_end_matches('/').to_string(),
            date_format: NBP_DATE_FORMAT,
            http: reqwest::Client::new(),
        }
    }

    /// Builds the request URL: the bare table endpoint means "latest", a
    /// valid date is appended as a path segment.
    fn request_url(&self, date: &str) -> Result<String, ProviderError> {
        if date.is_empty() {
            return Ok(self.base_url.clone());
        }
        if !validate::date_format(date, self.date_format) {
            return Err(ProviderError::InvalidInput(format!(
                "invalid date format: {date}, expected format: {}",
                self.date_format
            )));
        }
        Ok(format!("{}/{}", self.base_url, date))
    }

    async fn fetch_tables(&self, url: &str) -> Result<Vec<NbpTable>, ProviderError> {
        tracing::debug!(url, "fetching NBP table");

        let response = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                ProviderError::UpstreamUnavailable(format!("request to NBP failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderError::UpstreamUnavailable(format!("failed to read NBP response body: {e}"))
        })?;

        if !status.is_success() {
            let detail = format!("NBP returned status {}: {body}", status.as_u16());
            return Err(if status.is_server_error() {
                ProviderError::UpstreamUnavailable(detail)
            } else {
                ProviderError::InvalidInput(detail)
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Decode(format!("unexpected NBP payload: {e}")))
    }
}

impl Default for NbpProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the entries of `rates` whose code is in the requested set,
/// preserving the upstream table's order. Scanning the upstream list once
/// means duplicate requested codes cannot duplicate output rows.
fn filter_rates(rates: &[NbpRate], codes: &[String]) -> Vec<RateValue> {
    let requested: HashSet<&str> = codes.iter().map(String::as_str).collect();
    rates
        .iter()
        .filter(|rate| requested.contains(rate.code.as_str()))
        .map(|rate| RateValue {
            code: rate.code.clone(),
            value: rate.mid,
        })
        .collect()
}

#[async_trait::async_trait]
impl RateProvider for NbpProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn get_currencies(
        &self,
        codes: &[String],
        date: &str,
    ) -> Result<RatesResponse, ProviderError> {
        // Fail fast on code format before touching the network.
        for code in codes {
            if !validate::currency_code_format(code) {
                return Err(ProviderError::InvalidInput(format!(
                    "invalid currency code format: {code}"
                )));
            }
        }

        let url = self.request_url(date)?;
        let tables = self.fetch_tables(&url).await?;

        let table = tables.first().ok_or_else(|| {
            ProviderError::Decode("NBP returned an empty table list".to_string())
        })?;

        let rates = filter_rates(&table.rates, codes);
        if rates.is_empty() {
            return Err(ProviderError::NotFound(format!(
                "no rates found for the requested codes: {codes:?}"
            )));
        }

        Ok(RatesResponse {
            as_of: table.effective_date.clone(),
            provider: self.name.to_string(),
            rates,
        })
    }
}
