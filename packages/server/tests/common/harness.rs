//! Test harness for driving the HTTP app in-process.
//!
//! Builds the real router over mock dependencies and sends requests with
//! `tower::ServiceExt::oneshot`, so no port is bound.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use server_core::kernel::{BaseGeocoder, MockGeocoder, MockLinkExpander, ServerDeps};
use server_core::server::build_app;
use tower::ServiceExt;

pub struct TestHarness {
    pub app: Router,
    pub expander: MockLinkExpander,
    pub geocoder: Option<MockGeocoder>,
}

impl TestHarness {
    /// App with no Maps API key configured.
    pub fn new(expander: MockLinkExpander) -> Self {
        Self::build(expander, None)
    }

    /// App with a (mock) Maps API key configured.
    pub fn with_geocoder(expander: MockLinkExpander, geocoder: MockGeocoder) -> Self {
        Self::build(expander, Some(geocoder))
    }

    /// App over an arbitrary geocoder implementation.
    pub fn with_geocoder_service(
        expander: MockLinkExpander,
        geocoder: Arc<dyn BaseGeocoder>,
    ) -> Self {
        Self::assemble(expander, Some(geocoder), None)
    }

    fn build(expander: MockLinkExpander, geocoder: Option<MockGeocoder>) -> Self {
        let service = geocoder
            .clone()
            .map(|g| Arc::new(g) as Arc<dyn BaseGeocoder>);
        Self::assemble(expander, service, geocoder)
    }

    fn assemble(
        expander: MockLinkExpander,
        service: Option<Arc<dyn BaseGeocoder>>,
        geocoder: Option<MockGeocoder>,
    ) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = ServerDeps::new(Arc::new(expander.clone()), service);

        Self {
            app: build_app(deps, &[]),
            expander,
            geocoder,
        }
    }

    /// POST a raw body to `/api/maps/expand-url`.
    pub async fn post_raw(&self, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/maps/expand-url")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST `{ "url": url }` to `/api/maps/expand-url`.
    pub async fn expand(&self, url: &str) -> (StatusCode, Value) {
        self.post_raw(&serde_json::json!({ "url": url }).to_string())
            .await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
