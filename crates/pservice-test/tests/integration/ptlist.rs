//! Tests for the ptlist endpoint.
//!
//! Verifies successful enumerations in several zones and the error payload
//! for every rejected request.

use salvo::http::StatusCode;

use pservice_test::config::EnumerationConfig;

use super::helpers::*;

// ============================================================================
// Successful enumerations
// ============================================================================

#[test_log::test(tokio::test)]
async fn hourly_without_timezone() {
    let response = get(
        create_test_service(),
        &ptlist_path(
            Some("1h"),
            None,
            Some("20200101T010000Z"),
            Some("20200101T050000Z"),
        ),
    )
    .await
    .assert_status(StatusCode::OK)
    .assert_header_contains("content-type", "application/json");

    assert_eq!(
        response.interval(),
        [
            "20200101T010000Z",
            "20200101T020000Z",
            "20200101T030000Z",
            "20200101T040000Z",
            "20200101T050000Z",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn empty_timezone_uses_default() {
    let response = get(
        create_test_service(),
        &ptlist("1d", "", "20200101T010000Z", "20200105T010000Z"),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(
        response.interval(),
        [
            "20200101T010000Z",
            "20200102T010000Z",
            "20200103T010000Z",
            "20200104T010000Z",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn monthly_end_to_end() {
    let response = get(
        create_test_service(),
        &ptlist("1mo", "UTC", "20200102T030405Z", "20200502T030405Z"),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(
        response.interval(),
        [
            "20200131T030000Z",
            "20200229T030000Z",
            "20200331T030000Z",
            "20200430T030000Z",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn three_hours_athens() {
    let response = get(
        create_test_service(),
        &ptlist("3h", "Europe/Athens", "20200101T010000Z", "20200101T050000Z"),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(
        response.interval(),
        ["20200101T020000Z", "20200101T050000Z"]
    );
}

#[test_log::test(tokio::test)]
async fn monthly_athens() {
    let response = get(
        create_test_service(),
        &ptlist("1mo", "Europe/Athens", "20200101T010000Z", "20200501T010000Z"),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(
        response.interval(),
        [
            "20200131T010000Z",
            "20200229T010000Z",
            "20200331T010000Z",
            "20200430T010000Z",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn hourly_athens_across_fall_back_lists_each_hour_once() {
    let response = get(
        create_test_service(),
        &ptlist("1h", "Europe/Athens", "20201025T020000Z", "20201025T050000Z"),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(
        response.interval(),
        [
            "20201025T020000Z",
            "20201025T030000Z",
            "20201025T040000Z",
            "20201025T050000Z",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn hourly_los_angeles() {
    let response = get(
        create_test_service(),
        &ptlist(
            "1h",
            "America/Los_Angeles",
            "20200101T010000Z",
            "20200101T050000Z",
        ),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(response.interval().len(), 5);
}

#[test_log::test(tokio::test)]
async fn yearly_los_angeles() {
    let response = get(
        create_test_service(),
        &ptlist(
            "1y",
            "America/Los_Angeles",
            "20200101T010000Z",
            "20250101T010000Z",
        ),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(
        response.interval(),
        [
            "20201231T010000Z",
            "20211231T010000Z",
            "20221231T010000Z",
            "20231231T010000Z",
            "20241231T010000Z",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn equal_bounds_return_empty_array() {
    let response = get(
        create_test_service(),
        &ptlist("1h", "UTC", "20200102T030405Z", "20200102T030405Z"),
    )
    .await
    .assert_status(StatusCode::OK);

    assert_eq!(response.body, "[]");
}

#[test_log::test(tokio::test)]
async fn system_zone_fallback_is_accepted() {
    let service = create_service_with(EnumerationConfig::default());
    let response = get(
        &service,
        &ptlist_path(
            Some("2h"),
            None,
            Some("20200601T000000Z"),
            Some("20200601T120000Z"),
        ),
    )
    .await
    .assert_status(StatusCode::OK);

    let interval = response.interval();
    assert!(!interval.is_empty());
    assert!(interval.windows(2).all(|pair| pair[0] < pair[1]));
}

// ============================================================================
// Rejected requests
// ============================================================================

/// Sends `path` to the shared service and returns the error description.
async fn rejected(path: &str) -> String {
    get(create_test_service(), path)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_header_contains("content-type", "application/json")
        .error()
        .desc
}

#[test_log::test(tokio::test)]
async fn missing_period() {
    let desc = rejected(&ptlist_path(
        None,
        None,
        Some("20200101T010000Z"),
        Some("20200101T050000Z"),
    ))
    .await;
    assert_eq!(desc, "Missing period");
}

#[test_log::test(tokio::test)]
async fn missing_t1() {
    let desc = rejected(&ptlist_path(Some("1h"), None, None, Some("20200101T010000Z"))).await;
    assert_eq!(desc, "Missing t1");
}

#[test_log::test(tokio::test)]
async fn missing_t2() {
    let desc = rejected(&ptlist_path(Some("1h"), None, Some("20200101T010000Z"), None)).await;
    assert_eq!(desc, "Missing t2");
}

#[test_log::test(tokio::test)]
async fn unsupported_periods() {
    for period in ["1w", "0d", "0mo", "0y", "0h", "abc"] {
        let desc = rejected(&ptlist(period, "UTC", "20200101T010000Z", "20200101T050000Z")).await;
        assert!(
            desc.starts_with("Unsupported period"),
            "{period}: unexpected description {desc:?}"
        );
    }
}

#[test_log::test(tokio::test)]
async fn unknown_timezone() {
    let desc = rejected(&ptlist(
        "1h",
        "Africa/Wakanda",
        "20200101T010000Z",
        "20200101T050000Z",
    ))
    .await;
    assert!(desc.starts_with("Unknown timezone"), "{desc}");
}

#[test_log::test(tokio::test)]
async fn bad_t1() {
    let desc = rejected(&ptlist("1h", "UTC", "20200101T010000ZQ", "20200101T010000Z")).await;
    assert!(desc.starts_with("Invalid t1"), "{desc}");
}

#[test_log::test(tokio::test)]
async fn bad_t2() {
    let desc = rejected(&ptlist("1h", "UTC", "20200101T010000Z", "20200101T010000ZQ")).await;
    assert!(desc.starts_with("Invalid t2"), "{desc}");
}

#[test_log::test(tokio::test)]
async fn t1_after_t2() {
    let desc = rejected(&ptlist("1h", "UTC", "20200105T010000Z", "20200101T010000Z")).await;
    assert_eq!(desc, "t1 after t2");
}

#[test_log::test(tokio::test)]
async fn too_many_points() {
    let desc = rejected(&ptlist("1s", "UTC", "20200101T000000Z", "20200102T000000Z")).await;
    assert_eq!(
        desc,
        format!("Interval exceeds the limit of {TEST_MAX_POINTS} timestamps")
    );
}
