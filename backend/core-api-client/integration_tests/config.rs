use core_api_client::config::CoreApiConfig;
use core_api_client::error::CoreError;
use core_api_client::error::config::ConfigError;

use tempfile::TempDir;

/// **VALUE**: Verifies the public load/override flow composes the way the CLI uses it.
///
/// **WHY THIS MATTERS**: The CLI loads the file, then layers env overrides; if either
/// step loses the other's values the CLI talks to the wrong node.
///
/// **BUG THIS CATCHES**: Would catch overrides being applied before load (and then
/// overwritten) or load discarding unrelated sections.
#[test]
fn given_saved_config_when_loaded_and_overridden_then_file_values_survive() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    let mut saved = CoreApiConfig::default();
    saved.stream.max_batch_size = 250;
    saved.save(dir.path()).unwrap();

    // WHEN
    let mut loaded = CoreApiConfig::load(dir.path()).unwrap();
    loaded
        .apply_env_overrides(|key| match key {
            "CORE_API_NETWORK" => Some("stokenet".to_string()),
            _ => None,
        })
        .unwrap();

    // THEN
    assert_eq!(loaded.stream.max_batch_size, 250);
    assert_eq!(loaded.network, "stokenet");
}

/// **VALUE**: Verifies config errors convert into the crate-wide error.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[from]` on `CoreError::Config`.
#[test]
fn given_invalid_file_when_loaded_then_error_converts_into_core_error() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("core-api.toml"), "nodes = []\n").unwrap();

    // WHEN
    let error: CoreError = CoreApiConfig::load(dir.path()).unwrap_err().into();

    // THEN
    assert!(matches!(
        error,
        CoreError::Config(ConfigError::ValidationError { .. })
    ));
}
