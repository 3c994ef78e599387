use crate::RedactedSecret;

/// **VALUE**: Verifies secrets never leak through `Debug` or `Display`.
///
/// **WHY THIS MATTERS**: Node configs are logged at startup; a bearer token
/// showing up in a log file is a credential leak.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_secret_when_formatted_then_value_is_redacted() {
    // GIVEN: A secret
    let secret = RedactedSecret::new(String::from("super-secret-token"));

    // WHEN: Formatting both ways
    let debug = format!("{secret:?}");
    let display = format!("{secret}");

    // THEN: Value is absent, length is still observable
    assert!(!debug.contains("super-secret-token"));
    assert!(!display.contains("super-secret-token"));
    assert_eq!(secret.len(), 18);
    assert_eq!(secret.expose(), "super-secret-token");
}

/// **VALUE**: Verifies serialization is refused.
///
/// **BUG THIS CATCHES**: Would catch someone deriving `Serialize` so that
/// `config save` writes the token to disk.
#[test]
fn given_secret_when_serialized_then_returns_error() {
    let secret = RedactedSecret::new(String::from("token"));

    let result = serde_json::to_string(&secret);

    let err = result.expect_err("serialization must fail");
    assert!(err.to_string().contains("cannot be serialized"));
}
