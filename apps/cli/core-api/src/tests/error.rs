use crate::error::CliError;

use core_api_client::error::{ConfigError, CoreApiClientError};

use common::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies library errors convert into `CliError::Core` keeping their message.
///
/// **WHY THIS MATTERS**: The binary prints the error and exits 1; the original cause must
/// survive the conversion or users see a useless message.
///
/// **BUG THIS CATCHES**: Would catch a conversion that drops the source text.
#[test]
fn given_config_error_when_converted_then_core_variant_keeps_message() {
    // GIVEN
    let error = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: "Duplicate node name: a".to_string(),
    };

    // WHEN
    let cli_error = CliError::from(error);

    // THEN
    match &cli_error {
        CliError::Core { message, .. } => assert!(message.contains("Duplicate node name: a")),
        other => panic!("expected Core, got {other:?}"),
    }
    assert!(cli_error.to_string().starts_with("Core Error:"));
}

/// **VALUE**: Verifies the error serializes with a type tag.
///
/// **BUG THIS CATCHES**: Would catch the serde tagging being removed, which changes the
/// JSON shape tools parse from `--log-dir` output.
#[test]
fn given_client_error_when_serialized_then_tagged_with_type() {
    // GIVEN
    let error = CliError::from(CoreApiClientError::Auth {
        message: "HTTP 401 - ".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    // WHEN
    let json = serde_json::to_value(&error).unwrap();

    // THEN
    assert_eq!(json["type"], "Core");
    assert!(json["data"]["message"].as_str().unwrap().contains("HTTP 401"));
}
