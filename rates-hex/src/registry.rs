//! Provider registry.
//!
//! An explicit, immutable mapping of provider name to implementation,
//! constructed once at process start and passed by reference into the
//! inbound adapter. Lookup is by lowercase name.

use std::collections::HashMap;
use std::sync::Arc;

use rates_types::RateProvider;

/// Immutable name-to-provider lookup.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn RateProvider>>,
}

impl ProviderRegistry {
    /// Builds a registry from the given providers, keyed by their lowercase
    /// display names.
    pub fn new(providers: impl IntoIterator<Item = Arc<dyn RateProvider>>) -> Self {
        let providers = providers
            .into_iter()
            .map(|provider| (provider.name().to_lowercase(), provider))
            .collect();
        Self { providers }
    }

    /// Looks up a provider by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Arc<dyn RateProvider>> {
        self.providers.get(&name.to_lowercase()).cloned()
    }

    /// Sorted list of registered provider names, for error messages.
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
