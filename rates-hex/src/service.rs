//! Rates application service.
//!
//! Resolves the requested provider through the registry and delegates the
//! fetch to it. Contains NO transport or upstream logic - pure orchestration.

use rates_types::{AppError, RatesResponse};

use crate::registry::ProviderRegistry;

/// Application service for rate lookups.
pub struct RatesService {
    registry: ProviderRegistry,
}

impl RatesService {
    /// Creates a new service over the given provider registry.
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Fetches rates for `codes` from the named provider.
    ///
    /// An empty `date` means "most recent available". Provider failures
    /// propagate with their classification intact; the only failure this
    /// layer adds is an unknown provider name.
    pub async fn get_currencies(
        &self,
        provider_name: &str,
        codes: &[String],
        date: &str,
    ) -> Result<RatesResponse, AppError> {
        let provider = self.registry.get(provider_name).ok_or_else(|| {
            AppError::bad_request(format!(
                "unknown provider: {provider_name}, supported providers: {:?}",
                self.registry.provider_names()
            ))
        })?;

        provider.get_currencies(codes, date).await.map_err(Into::into)
    }
}
