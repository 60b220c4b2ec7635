//! Data Transfer Objects (DTOs) for gateway responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single normalized exchange rate.
///
/// `code` is always a member of the originally requested code set; the
/// ordering of `RateValue`s in a [`RatesResponse`] follows the upstream
/// table's declared order, not the caller's request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateValue {
    /// 3-letter uppercase currency code
    #[schema(example = "USD")]
    pub code: String,
    /// Mid-market rate for the currency on the as-of date
    #[schema(example = 4.0321)]
    pub value: f64,
}

/// Normalized, provider-agnostic rates response.
///
/// Constructed once per successful fetch; `rates` is never empty - a fetch
/// that matches nothing fails with a not-found classification instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatesResponse {
    /// Effective date of the upstream table, `YYYY-MM-DD`
    #[serde(rename = "asOf")]
    #[schema(example = "2023-01-01")]
    pub as_of: String,
    /// Display name of the provider that produced the data
    #[schema(example = "NBP")]
    pub provider: String,
    pub rates: Vec<RateValue>,
}

/// Failure shape returned to callers alongside a transport status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short classification of the failure
    #[schema(example = "invalid input")]
    pub message: String,
    /// Human-readable cause, when one is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_response_serializes_with_camel_case_as_of() {
        let response = RatesResponse {
            as_of: "2023-01-01".into(),
            provider: "NBP".into(),
            rates: vec![RateValue {
                code: "USD".into(),
                value: 4.0,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "asOf": "2023-01-01",
                "provider": "NBP",
                "rates": [{ "code": "USD", "value": 4.0 }]
            })
        );
    }

    #[test]
    fn error_response_omits_absent_details() {
        let err = ErrorResponse {
            message: "not found".into(),
            details: None,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "not found" }));
    }

    #[test]
    fn error_response_includes_details_when_present() {
        let err = ErrorResponse {
            message: "upstream unavailable".into(),
            details: Some("status 503".into()),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["details"], "status 503");
    }
}
