//! Integration tests for Tea House.
//!
//! The storefront router is driven in process with
//! `tower::ServiceExt::oneshot`; no socket is opened and nothing touches the
//! disk. State lives in a [`MemoryStorage`] the test keeps a handle to, so
//! persisted documents can be inspected and a "restart" is just building a
//! new router over the same storage.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tea-house-integration-tests
//! ```

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use tea_house_core::{Catalog, MemoryStorage, Storage};
use tea_house_storefront::config::StorefrontConfig;
use tea_house_storefront::middleware::HX_TRIGGER;
use tea_house_storefront::routes;
use tea_house_storefront::state::AppState;
use tower::ServiceExt;
use url::form_urlencoded;

/// Largest response body the helpers will read.
const BODY_LIMIT: usize = 1024 * 1024;

/// A collected response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of the `HX-Trigger` header, if any.
    #[must_use]
    pub fn trigger(&self) -> Option<&str> {
        self.headers.get(HX_TRIGGER).and_then(|v| v.to_str().ok())
    }

    /// Value of the `Location` header, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

/// A storefront over in-memory storage.
pub struct TestContext {
    pub storage: MemoryStorage,
    app: Router,
}

impl TestContext {
    /// Fresh storefront with nothing stored.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    /// Storefront over existing storage, as after a restart.
    #[must_use]
    pub fn with_storage(storage: MemoryStorage) -> Self {
        let state = AppState::new(
            StorefrontConfig::default(),
            Arc::new(storage.clone()),
            Catalog::tea_house(),
        );
        Self {
            storage,
            app: routes::app(state),
        }
    }

    /// Same storage, new process state.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::with_storage(self.storage.clone())
    }

    /// Raw stored document for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory storage fails, which it never does.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn stored(&self, key: &str) -> Option<serde_json::Value> {
        self.storage
            .get(key)
            .expect("memory storage read")
            .map(|raw| serde_json::from_str(&raw).expect("stored document is JSON"))
    }

    /// `GET` as the page script would (fragment request).
    pub async fn get_fragment(&self, uri: &str) -> TestResponse {
        self.send(get(uri).header("HX-Request", "true")).await
    }

    /// `GET` as a plain browser navigation.
    pub async fn get_page(&self, uri: &str) -> TestResponse {
        self.send(get(uri)).await
    }

    /// Form `POST` as the page script would (fragment request).
    pub async fn post_fragment(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        self.send_form(post(uri).header("HX-Request", "true"), form).await
    }

    /// Form `POST` without the page script.
    pub async fn post_page(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        self.send_form(post(uri), form).await
    }

    #[allow(clippy::expect_used)]
    async fn send_form(
        &self,
        builder: axum::http::request::Builder,
        form: &[(&str, &str)],
    ) -> TestResponse {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let request = builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request");
        self.dispatch(request).await
    }

    #[allow(clippy::expect_used)]
    async fn send(&self, builder: axum::http::request::Builder) -> TestResponse {
        self.dispatch(builder.body(Body::empty()).expect("valid request"))
            .await
    }

    #[allow(clippy::expect_used)]
    async fn dispatch(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("readable body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

fn post(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("POST").uri(uri)
}

/// `path?key=value&...` with the pairs form-encoded.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{path}?{query}")
}
