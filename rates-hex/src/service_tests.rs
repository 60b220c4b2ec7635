//! RatesService and router unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use rates_types::{
        AppError, ProviderError, RateProvider, RateValue, RatesResponse,
    };

    use crate::inbound::HttpServer;
    use crate::{ProviderRegistry, RatesService};

    /// Canned outcome for the mock provider.
    enum Outcome {
        Rates,
        NotFound,
        Unavailable,
    }

    /// In-memory provider for testing the service and routing layers.
    struct MockProvider {
        name: &'static str,
        outcome: Outcome,
        calls: Mutex<Vec<(Vec<String>, String)>>,
    }

    impl MockProvider {
        fn new(outcome: Outcome) -> Self {
            Self {
                name: "Mock",
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RateProvider for MockProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn get_currencies(
            &self,
            codes: &[String],
            date: &str,
        ) -> Result<RatesResponse, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push((codes.to_vec(), date.to_string()));

            match self.outcome {
                Outcome::Rates => Ok(RatesResponse {
                    as_of: "2023-01-02".into(),
                    provider: self.name.into(),
                    rates: vec![RateValue {
                        code: "USD".into(),
                        value: 4.0,
                    }],
                }),
                Outcome::NotFound => Err(ProviderError::NotFound("no rates found".into())),
                Outcome::Unavailable => {
                    Err(ProviderError::UpstreamUnavailable("status 503".into()))
                }
            }
        }
    }

    fn service_with(provider: Arc<MockProvider>) -> RatesService {
        let registry = ProviderRegistry::new([provider as Arc<dyn RateProvider>]);
        RatesService::new(registry)
    }

    #[tokio::test]
    async fn delegates_to_the_named_provider_unchanged() {
        let provider = Arc::new(MockProvider::new(Outcome::Rates));
        let service = service_with(provider.clone());

        let codes = vec!["USD".to_string(), "USD".to_string()];
        let response = service
            .get_currencies("mock", &codes, "2023-01-02")
            .await
            .unwrap();

        assert_eq!(response.provider, "Mock");
        // Codes pass through without dedup or substitution.
        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(codes, "2023-01-02".to_string())]);
    }

    #[tokio::test]
    async fn provider_lookup_is_case_insensitive() {
        let provider = Arc::new(MockProvider::new(Outcome::Rates));
        let service = service_with(provider);

        let codes = vec!["USD".to_string()];
        assert!(service.get_currencies("MOCK", &codes, "").await.is_ok());
    }

    #[tokio::test]
    async fn unknown_provider_is_a_bad_request_listing_supported_names() {
        let provider = Arc::new(MockProvider::new(Outcome::Rates));
        let service = service_with(provider.clone());

        let err = service
            .get_currencies("frankfurter", &["USD".to_string()], "")
            .await
            .unwrap_err();

        match err {
            AppError::BadRequest { details, .. } => {
                assert!(details.contains("frankfurter"));
                assert!(details.contains("mock"));
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert!(provider.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_failures_keep_their_classification() {
        let service = service_with(Arc::new(MockProvider::new(Outcome::Unavailable)));

        let err = service
            .get_currencies("mock", &["USD".to_string()], "")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadGateway { .. }));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Router tests
    // ─────────────────────────────────────────────────────────────────────────

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn request(
        outcome: Outcome,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let service = service_with(Arc::new(MockProvider::new(outcome)));
        let router = HttpServer::new(service).router();

        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let (status, body) = request(Outcome::Rates, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn currencies_endpoint_returns_normalized_rates() {
        let (status, body) =
            request(Outcome::Rates, "/currencies?codes=USD&provider=mock").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "asOf": "2023-01-02",
                "provider": "Mock",
                "rates": [{ "code": "USD", "value": 4.0 }]
            })
        );
    }

    #[tokio::test]
    async fn missing_rates_surface_as_404_error_body() {
        let (status, body) =
            request(Outcome::NotFound, "/currencies?codes=JPY&provider=mock").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "no rates found");
    }

    #[tokio::test]
    async fn upstream_failures_surface_as_502_error_body() {
        let (status, body) =
            request(Outcome::Unavailable, "/currencies?provider=mock").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], "upstream unavailable");
        assert_eq!(body["details"], "status 503");
    }

    #[tokio::test]
    async fn unknown_provider_surfaces_as_400_error_body() {
        let (status, body) = request(Outcome::Rates, "/currencies?provider=nope").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid input");
    }
}
