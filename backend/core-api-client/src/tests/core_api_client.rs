use crate::config::RequestConfig;
use crate::core_api_client::{RetryPolicy, error_from_body, normalize_base_url};
use crate::error::core_api_client::CoreApiClientError;

use common::HttpStatusCode;
use models::ErrorResponseType;

use std::time::Duration;

/// **VALUE**: Verifies base URLs gain a trailing slash so endpoints join beneath them.
///
/// **WHY THIS MATTERS**: `Url::join` replaces the last path segment when the base lacks
/// a trailing slash, so `http://node/core` + `status/network-status` would become
/// `http://node/status/network-status` and every call would 404.
///
/// **BUG THIS CATCHES**: Would catch normalization being skipped or applied twice.
#[test]
fn given_base_url_without_trailing_slash_when_normalized_then_endpoints_join_under_core() {
    for raw in ["http://127.0.0.1:3333/core", "http://127.0.0.1:3333/core/"] {
        // GIVEN / WHEN
        let base = normalize_base_url(raw).unwrap();
        let joined = base.join("status/network-status").unwrap();

        // THEN
        assert_eq!(base.as_str(), "http://127.0.0.1:3333/core/");
        assert_eq!(
            joined.as_str(),
            "http://127.0.0.1:3333/core/status/network-status"
        );
    }
}

/// **VALUE**: Verifies garbage URLs are reported as URL errors.
///
/// **BUG THIS CATCHES**: Would catch a panic or a misleading HTTP error for typos.
#[test]
fn given_invalid_url_when_normalized_then_returns_url_parse_error() {
    // GIVEN / WHEN
    let result = normalize_base_url("not a url");

    // THEN
    assert!(matches!(result, Err(CoreApiClientError::UrlParse { .. })));
}

/// **VALUE**: Verifies structured error bodies become `Api` errors with the parsed response.
///
/// **WHY THIS MATTERS**: Callers branch on error details (e.g. out-of-bounds stream
/// requests); losing the parsed body forces them to string-match messages.
///
/// **BUG THIS CATCHES**: Would catch the body being discarded or the wrong variant chosen.
#[test]
fn given_error_response_body_when_mapped_then_returns_api_error() {
    // GIVEN
    let body = r#"{"error_type":"StreamTransactions","code":400,"message":"Out of bounds","details":{"type":"RequestedStateVersionOutOfBounds","max_ledger_state_version":12}}"#;

    // WHEN
    let error = error_from_body(HttpStatusCode(400), body);

    // THEN
    assert_eq!(error.status(), Some(HttpStatusCode(400)));
    let response = error.error_response().expect("should carry parsed response");
    assert_eq!(response.error_type(), ErrorResponseType::StreamTransactions);
    assert_eq!(response.message(), "Out of bounds");
}

/// **VALUE**: Verifies unparsable bodies fall back to `Server` errors with the raw text.
///
/// **BUG THIS CATCHES**: Would catch a JSON error being returned instead, which hides
/// the HTTP status from the caller.
#[test]
fn given_plain_text_body_when_mapped_then_returns_server_error_with_text() {
    // GIVEN / WHEN
    let error = error_from_body(HttpStatusCode(502), "Bad Gateway");

    // THEN
    match error {
        CoreApiClientError::Server {
            status, message, ..
        } => {
            assert_eq!(status, HttpStatusCode(502));
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies 401/403 map to `Auth` regardless of body.
///
/// **BUG THIS CATCHES**: Would catch missing tokens surfacing as generic server errors.
#[test]
fn given_unauthorized_status_when_mapped_then_returns_auth_error() {
    for status in [401, 403] {
        // GIVEN / WHEN
        let error = error_from_body(HttpStatusCode(status), "");

        // THEN
        assert!(
            matches!(error, CoreApiClientError::Auth { .. }),
            "{status} should map to Auth"
        );
    }
}

/// **VALUE**: Verifies the retry policy mirrors the request config.
///
/// **BUG THIS CATCHES**: Would catch initial and max delays being swapped.
#[test]
fn given_request_config_when_retry_policy_derived_then_values_carried_over() {
    // GIVEN
    let config = RequestConfig {
        timeout: Duration::from_secs(5),
        max_retries: 7,
        initial_retry_delay: Duration::from_millis(50),
        max_retry_delay: Duration::from_millis(400),
    };

    // WHEN
    let policy = RetryPolicy::from(&config);

    // THEN
    assert_eq!(policy.max_retries, 7);
    assert_eq!(policy.initial_delay, Duration::from_millis(50));
    assert_eq!(policy.max_delay, Duration::from_millis(400));
    assert_eq!(RetryPolicy::none().max_retries, 0);
}
