use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the file of the caller.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries a location. If the
/// file is lost, a failed Core API call can't be traced back to the endpoint
/// method that raised it.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being
/// propagated or the file field is populated from the wrong source.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current location
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(location.file.ends_with(".rs"));
    assert!(location.line > 0);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the `[file:line:column]` display format.
///
/// **WHY THIS MATTERS**: Error messages end with this suffix; log scrapers and
/// humans both rely on it being stable.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A hand-built location
    let location = ErrorLocation {
        file: "client.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Bracketed triple
    assert_eq!(formatted, "[client.rs:42:7]");
}
