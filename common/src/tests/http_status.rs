use crate::HttpStatusCode;

/// **VALUE**: Verifies which statuses the client treats as transient.
///
/// **WHY THIS MATTERS**: Retrying a 400 would hammer a node with a request
/// it will never accept; not retrying a 503 makes a restarting node look dead.
///
/// **BUG THIS CATCHES**: Would catch if the retryable set drifts, e.g. 500
/// being added (the Core API returns 500 for deterministic internal errors).
#[test]
fn given_status_codes_when_classified_then_only_transient_ones_are_retryable() {
    for code in [429, 502, 503, 504] {
        assert!(HttpStatusCode(code).is_retryable(), "{code} should be retryable");
    }
    for code in [200, 400, 404, 500] {
        assert!(!HttpStatusCode(code).is_retryable(), "{code} should not be retryable");
    }
}

#[test]
fn given_status_codes_when_categorized_then_ranges_are_disjoint() {
    let ok = HttpStatusCode::from(200);
    let bad_request = HttpStatusCode::from(400);
    let unavailable = HttpStatusCode::from(503);

    assert!(ok.is_success() && !ok.is_client_error() && !ok.is_server_error());
    assert!(bad_request.is_client_error() && !bad_request.is_server_error());
    assert!(unavailable.is_server_error() && !unavailable.is_success());
    assert_eq!(unavailable.to_string(), "503");
}
