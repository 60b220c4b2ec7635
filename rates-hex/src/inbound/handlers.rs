//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use rates_types::AppError;

use crate::RatesService;

const DEFAULT_CODES: &str = "USD,EUR";
const DEFAULT_PROVIDER: &str = "nbp";

/// Application state shared across handlers.
pub struct AppState {
    pub service: RatesService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self.0.to_error_response())).into_response()
    }
}

/// Query parameters for the currencies endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CurrenciesQuery {
    /// Comma-separated currency codes, e.g. `USD,EUR`
    pub codes: Option<String>,
    /// As-of date (`YYYY-MM-DD`); omitted means most recent
    #[serde(default)]
    pub date: String,
    /// Provider name, defaults to `nbp`
    pub provider: Option<String>,
}

impl CurrenciesQuery {
    /// Splits the raw `codes` parameter, falling back to the default set.
    pub fn code_list(&self) -> Vec<String> {
        let raw = match self.codes.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => DEFAULT_CODES,
        };
        raw.split(',').map(|code| code.trim().to_string()).collect()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Fetch normalized exchange rates.
#[tracing::instrument(skip(state))]
pub async fn get_currencies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CurrenciesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let codes = query.code_list();
    let provider = query.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);

    let response = state.service.get_currencies(provider, &codes, &query.date).await?;
    Ok(Json(response))
}
