//! Integration tests for the UrbanSwift storefront.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed:
//!
//! ```bash
//! cargo test -p urbanswift-integration-tests
//! ```
//!
//! [`TestClient`] keeps the session cookie between requests the way a
//! browser would, replacing it whenever the server sends a new one.

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use urbanswift_storefront::app;
use urbanswift_storefront::config::StorefrontConfig;
use urbanswift_storefront::middleware::session::SESSION_COOKIE_NAME;
use urbanswift_storefront::state::AppState;

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// One visitor talking to a fresh application.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// Build the app from default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig::from_lookup(|_| None).expect("default config is valid");
        Self {
            app: app(AppState::new(config)),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).expect("valid request");
        self.send(request).await
    }

    /// POST an url-encoded form.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }

    /// Send a request with the current session cookie attached.
    pub async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request.headers_mut().insert(
                header::COOKIE,
                cookie.parse().expect("cookie is a valid header value"),
            );
        }

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = session_cookie(response.headers()) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// POST a form, check it redirected, and GET the target.
    pub async fn submit(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let response = self.post_form(uri, fields).await;
        assert_eq!(
            response.status,
            StatusCode::SEE_OTHER,
            "POST {uri} should redirect, got body: {}",
            response.body
        );
        let target = response
            .location()
            .expect("redirect has a location")
            .to_owned();
        self.get(&target).await
    }
}

/// `name=value` of the session cookie in a `set-cookie` header.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(str::to_owned)
}
