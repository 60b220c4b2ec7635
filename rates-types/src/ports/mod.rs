//! Port traits implemented by adapter crates.

mod provider;

pub use provider::RateProvider;
