//! Tests for the liveness endpoint and router assembly.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn healthcheck_returns_ok() {
    let response = get(create_test_service(), HEALTHCHECK_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.body, "OK");
}

#[test_log::test(tokio::test)]
async fn router_with_custom_timeout_serves_requests() {
    let settings = test_config();
    let settings = Settings {
        server: ServerConfig {
            request_timeout_secs: 1,
            ..settings.server
        },
        ..settings
    };
    let service = salvo::Service::new(service_router(settings).expect("valid timeout"));

    let response = get(&service, HEALTHCHECK_ROUTE_PREFIX)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.body, "OK");
}

#[test_log::test]
fn router_rejects_zero_request_timeout() {
    let settings = test_config();
    let settings = Settings {
        server: ServerConfig {
            request_timeout_secs: 0,
            ..settings.server
        },
        ..settings
    };

    assert!(service_router(settings).is_err());
}
