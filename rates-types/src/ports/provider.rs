//! Rate provider port.
//!
//! This trait defines the interface every rate source must satisfy.
//! Implementations can be HTTP clients against real upstreams, mock
//! providers, etc.

use crate::dto::RatesResponse;
use crate::error::ProviderError;

/// Port trait for exchange-rate providers.
///
/// Implementations must validate the inputs they are sensitive to (date
/// format, code format) and must never silently drop or substitute codes:
/// every code in a returned response is a member of the requested set, and
/// a request matching nothing fails with [`ProviderError::NotFound`] rather
/// than returning an empty response.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Display name of the provider, used in responses and log output.
    fn name(&self) -> &str;

    /// Fetch rates for the given currency codes.
    ///
    /// An empty `date` means "most recent available"; otherwise the provider
    /// validates it against its upstream's expected calendar format.
    async fn get_currencies(
        &self,
        codes: &[String],
        date: &str,
    ) -> Result<RatesResponse, ProviderError>;
}
