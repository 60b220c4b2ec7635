//! Error types for the rates gateway.

use crate::dto::ErrorResponse;

/// Provider-level errors (the failure classifications of the port).
///
/// Every provider operation returns either a success value or exactly one of
/// these classifications - never an unclassified failure. The string payload
/// is the human-readable cause, surfaced to callers as `details`.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Malformed currency code, malformed date, or the upstream rejected the
    /// constructed request as a client error.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Network-level failure or an upstream 5xx response.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Well-formed request and reachable upstream, but none of the requested
    /// codes exist in the returned table.
    #[error("no rates found: {0}")]
    NotFound(String),

    /// Upstream returned 2xx but the body did not parse into the expected
    /// shape. Indicates the upstream changed shape, not a caller mistake.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Short classification string for the caller-facing `message` field.
    pub fn message(&self) -> &'static str {
        match self {
            ProviderError::InvalidInput(_) => "invalid input",
            ProviderError::UpstreamUnavailable(_) => "upstream unavailable",
            ProviderError::NotFound(_) => "no rates found",
            ProviderError::Decode(_) => "failed to decode upstream response",
        }
    }

    /// Human-readable cause.
    pub fn details(&self) -> &str {
        match self {
            ProviderError::InvalidInput(d)
            | ProviderError::UpstreamUnavailable(d)
            | ProviderError::NotFound(d)
            | ProviderError::Decode(d) => d,
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes; the inbound adapter owns the actual
/// status-code conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {details}")]
    BadRequest { message: String, details: String },

    #[error("not found: {details}")]
    NotFound { message: String, details: String },

    #[error("bad gateway: {details}")]
    BadGateway { message: String, details: String },

    #[error("internal error: {details}")]
    Internal { message: String, details: String },
}

impl AppError {
    pub fn bad_request(details: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: "invalid input".into(),
            details: details.into(),
        }
    }

    /// The caller-facing failure body for this error.
    pub fn to_error_response(&self) -> ErrorResponse {
        let (message, details) = match self {
            AppError::BadRequest { message, details }
            | AppError::NotFound { message, details }
            | AppError::BadGateway { message, details }
            | AppError::Internal { message, details } => (message, details),
        };
        ErrorResponse {
            message: message.clone(),
            details: Some(details.clone()),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        let message = err.message().to_string();
        let details = err.details().to_string();
        match err {
            ProviderError::InvalidInput(_) => AppError::BadRequest { message, details },
            ProviderError::UpstreamUnavailable(_) => AppError::BadGateway { message, details },
            ProviderError::NotFound(_) => AppError::NotFound { message, details },
            ProviderError::Decode(_) => AppError::Internal { message, details },
        }
    }
}
