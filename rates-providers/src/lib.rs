//! # Rates Providers
//!
//! Outbound adapters implementing the [`rates_types::RateProvider`] port
//! against concrete upstream rate sources.
//!
//! Currently one source is supported: NBP (the National Bank of Poland),
//! table A mid rates.

mod nbp;

pub use nbp::NbpProvider;
