//! # Rates Types
//!
//! Domain types and port traits for the exchange-rate gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `dto/` - Canonical response and error shapes shared across providers
//! - `ports/` - The `RateProvider` trait that adapters must implement
//! - `validate/` - Pure input-format validators
//! - `error/` - Provider and application error types

pub mod dto;
pub mod error;
pub mod ports;
pub mod validate;

// Re-export commonly used types
pub use dto::{ErrorResponse, RateValue, RatesResponse};
pub use error::{AppError, ProviderError};
pub use ports::RateProvider;
