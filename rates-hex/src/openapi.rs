//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use rates_types::dto::{ErrorResponse, RateValue, RatesResponse};
use utoipa::OpenApi;

use crate::inbound::handlers::CurrenciesQuery;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Fetch normalized exchange rates for a set of currency codes
#[utoipa::path(
    get,
    path = "/currencies",
    tag = "rates",
    params(CurrenciesQuery),
    responses(
        (status = 200, description = "Normalized rates for the requested codes", body = RatesResponse),
        (status = 400, description = "Malformed code, malformed date, or unknown provider", body = ErrorResponse),
        (status = 404, description = "None of the requested codes exist in the upstream table", body = ErrorResponse),
        (status = 502, description = "Upstream source unreachable or failing", body = ErrorResponse),
        (status = 500, description = "Upstream payload could not be decoded", body = ErrorResponse)
    )
)]
async fn get_currencies() {}

/// OpenAPI documentation for the rates gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rates Gateway API",
        version = "1.0.0",
        description = "A currency exchange-rate gateway: fetches rate data from an upstream source, normalizes it into a provider-agnostic schema, and reports structured errors.",
        license(name = "MIT"),
    ),
    paths(
        health,
        get_currencies,
    ),
    components(
        schemas(
            RatesResponse,
            RateValue,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rates", description = "Exchange-rate lookup"),
    )
)]
pub struct ApiDoc;
