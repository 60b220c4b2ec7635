//! # Rates Hex
//!
//! Application service layer and HTTP adapter for the rates gateway.
//!
//! ## Architecture
//!
//! - `registry/` - Immutable name-to-provider lookup built at startup
//! - `service/` - Application service (resolves a provider, delegates to it)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! Providers are injected as `Arc<dyn RateProvider>` trait objects, so the
//! service never knows which concrete upstream it is talking to.

pub mod inbound;
mod openapi;
pub mod registry;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use registry::ProviderRegistry;
pub use service::RatesService;
