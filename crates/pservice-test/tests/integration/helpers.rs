#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service with a fixed configuration
//! - Building ptlist query strings
//! - Making HTTP requests and asserting on responses

use std::sync::OnceLock;

use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use serde::de::DeserializeOwned;

pub use pservice_test::app::service_router;
pub use pservice_test::config::{EnumerationConfig, LoggingConfig, ServerConfig, Settings};

pub use pservice_test::app::api::{ErrorResponse, HEALTHCHECK_ROUTE_PREFIX, PTLIST_ROUTE_PREFIX};
pub use tracing;

/// Limit used by the shared service; small enough to exercise the guard.
pub const TEST_MAX_POINTS: usize = 1_000;

/// Test configuration - static struct instead of loading from file.
#[must_use]
pub fn test_config() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            request_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        enumeration: EnumerationConfig {
            max_points: TEST_MAX_POINTS,
            default_timezone: Some("UTC".to_string()),
        },
    }
}

/// Static reference to shared test service (initialized once per test run)
static TEST_SERVICE: OnceLock<Service> = OnceLock::new();

/// Returns a shared test service with the full router.
///
/// Requests without `tz` resolve to UTC so expectations do not depend on the
/// machine running the tests.
#[must_use]
pub fn create_test_service() -> &'static Service {
    TEST_SERVICE.get_or_init(|| {
        Service::new(service_router(test_config()).expect("test configuration is valid"))
    })
}

/// Creates a service with custom enumeration settings.
#[must_use]
pub fn create_service_with(enumeration: EnumerationConfig) -> Service {
    Service::new(
        service_router(Settings {
            enumeration,
            ..test_config()
        })
        .expect("test configuration is valid"),
    )
}

/// Builds a `/ptlist` path; `None` parameters are omitted entirely.
#[must_use]
pub fn ptlist_path(
    period: Option<&str>,
    tz: Option<&str>,
    t1: Option<&str>,
    t2: Option<&str>,
) -> String {
    let params: Vec<String> = [("period", period), ("tz", tz), ("t1", t1), ("t2", t2)]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{name}={v}")))
        .collect();

    if params.is_empty() {
        PTLIST_ROUTE_PREFIX.to_string()
    } else {
        format!("{PTLIST_ROUTE_PREFIX}?{}", params.join("&"))
    }
}

/// Shorthand for a `/ptlist` path with every parameter present.
#[must_use]
pub fn ptlist(period: &str, tz: &str, t1: &str, t2: &str) -> String {
    ptlist_path(Some(period), Some(tz), Some(t1), Some(t2))
}

/// Sends a GET request to `path` on `service`.
///
/// ## Panics
/// Panics if the response body cannot be read.
pub async fn get(service: &Service, path: &str) -> TestResponse {
    let url = format!("http://127.0.0.1:5800{path}");
    let mut response = TestClient::get(&url).send(service).await;

    let status = response
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body = response
        .take_string()
        .await
        .expect("Response body should be readable");

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {} (body: {})",
            self.status, self.body
        );
        self
    }

    /// Asserts that a header contains the expected substring.
    #[must_use]
    pub fn assert_header_contains(self, name: &str, expected: &str) -> Self {
        let value = self.get_header(name).unwrap_or_default();
        assert!(
            value.contains(expected),
            "Expected header {name} to contain {expected:?}, got {value:?}"
        );
        self
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decodes the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON for `T`.
    #[must_use]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body is not valid JSON ({e}): {}", self.body))
    }

    /// Decodes a successful interval body.
    #[must_use]
    pub fn interval(&self) -> Vec<String> {
        self.json()
    }

    /// Decodes an error body and asserts its status marker.
    #[must_use]
    pub fn error(&self) -> ErrorResponse {
        let err: ErrorResponse = self.json();
        assert_eq!(err.status, "error");
        err
    }
}
