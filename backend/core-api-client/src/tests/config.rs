use crate::CORE_API_DEFAULT_URL;
use crate::config::{CONFIG_FILE_NAME, CoreApiConfig, CoreApiNodeConfig};
use crate::error::config::ConfigError;

use std::collections::HashMap;
use std::time::Duration;

use tempfile::TempDir;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn two_node_config() -> CoreApiConfig {
    let mut archive = CoreApiNodeConfig::new("archive", "https://archive.example.com/core");
    archive.disabled_for_transaction_indexing = true;
    let mut offline = CoreApiNodeConfig::new("offline", "http://10.0.0.9:3333/core");
    offline.enabled = false;

    CoreApiConfig {
        nodes: vec![
            CoreApiNodeConfig::new("primary", "http://10.0.0.1:3333/core"),
            archive,
            offline,
        ],
        ..CoreApiConfig::default()
    }
}

/// **VALUE**: Pins the documented defaults.
///
/// **WHY THIS MATTERS**: A fresh install with no config file runs entirely on these values.
///
/// **BUG THIS CATCHES**: Would catch a default function drifting (e.g. timeout in millis
/// instead of seconds) or the default node pointing somewhere other than the local node.
#[test]
fn given_no_overrides_when_default_config_built_then_matches_documented_values() {
    // GIVEN / WHEN
    let config = CoreApiConfig::default();

    // THEN
    assert_eq!(config.version, 1);
    assert_eq!(config.network, "mainnet");
    assert_eq!(config.request.timeout, Duration::from_secs(30));
    assert_eq!(config.request.max_retries, 3);
    assert_eq!(config.request.initial_retry_delay, Duration::from_millis(200));
    assert_eq!(config.request.max_retry_delay, Duration::from_secs(2));
    assert_eq!(config.stream.max_batch_size, 1000);
    assert_eq!(config.health.max_allowed_state_version_lag, 100);
    assert_eq!(config.nodes.len(), 1);
    assert_eq!(config.nodes[0].core_api_address, CORE_API_DEFAULT_URL);
    assert_eq!(CORE_API_DEFAULT_URL, "http://127.0.0.1:3333/core");
    assert!(config.validate().is_ok());
}

/// **VALUE**: Verifies a missing config file is not an error.
///
/// **WHY THIS MATTERS**: First runs have no file; failing would make the CLI unusable
/// until someone writes one by hand.
///
/// **BUG THIS CATCHES**: Would catch `load()` propagating the NotFound IO error.
#[test]
fn given_empty_directory_when_load_called_then_returns_defaults() {
    // GIVEN
    let dir = TempDir::new().unwrap();

    // WHEN
    let config = CoreApiConfig::load(dir.path()).unwrap();

    // THEN
    assert_eq!(config, CoreApiConfig::default());
}

/// **VALUE**: Verifies save writes through a temp file and leaves only the final file.
///
/// **WHY THIS MATTERS**: A crash mid-write must never leave a truncated `core-api.toml`.
///
/// **BUG THIS CATCHES**: Would catch writing directly to the target path, or forgetting
/// the rename so the `.tmp` file lingers and the real file is never updated.
#[test]
fn given_custom_config_when_saved_and_loaded_then_values_survive_and_no_temp_file_remains() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    let mut config = two_node_config();
    config.network = "stokenet".to_string();
    config.request.timeout = Duration::from_secs(45);
    config.nodes[0].auth_token_env = Some("PRIMARY_TOKEN".to_string());

    // WHEN
    config.save(dir.path()).unwrap();
    let loaded = CoreApiConfig::load(dir.path()).unwrap();

    // THEN
    assert_eq!(loaded, config);
    assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    assert!(!dir.path().join(format!("{CONFIG_FILE_NAME}.tmp")).exists());
}

/// **VALUE**: Verifies durations are written in human-readable form.
///
/// **WHY THIS MATTERS**: Operators edit this file by hand; `"200ms"` is readable,
/// `{ secs = 0, nanos = 200000000 }` is not.
///
/// **BUG THIS CATCHES**: Would catch the `duration_format` adapter being dropped from a field.
#[test]
fn given_default_config_when_saved_then_durations_are_humantime_strings() {
    // GIVEN
    let dir = TempDir::new().unwrap();

    // WHEN
    CoreApiConfig::default().save(dir.path()).unwrap();
    let contents = std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();

    // THEN
    assert!(contents.contains("timeout = \"30s\""), "{contents}");
    assert!(contents.contains("initial_retry_delay = \"200ms\""), "{contents}");
    assert!(contents.contains("max_retry_delay = \"2s\""), "{contents}");
}

/// **VALUE**: Verifies a partial file fills every omitted field with its default.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` making hand-written
/// minimal configs fail to parse.
#[test]
fn given_partial_toml_when_loaded_then_missing_fields_use_defaults() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
network = "stokenet"

[request]
timeout = "1m 30s"

[[nodes]]
name = "babylon"
core_api_address = "https://babylon.example.com/core"
"#,
    )
    .unwrap();

    // WHEN
    let config = CoreApiConfig::load(dir.path()).unwrap();

    // THEN
    assert_eq!(config.network, "stokenet");
    assert_eq!(config.request.timeout, Duration::from_secs(90));
    assert_eq!(config.request.max_retries, 3);
    assert_eq!(config.nodes.len(), 1);
    assert!(config.nodes[0].enabled);
    assert_eq!(config.nodes[0].request_weighting, 1.0);
    assert_eq!(config.nodes[0].auth_token_env, None);
}

/// **VALUE**: Verifies malformed files are reported rather than silently replaced.
///
/// **BUG THIS CATCHES**: Would catch `load()` falling back to defaults on parse errors,
/// which would point the CLI at the wrong node without telling anyone.
#[test]
fn given_malformed_toml_when_loaded_then_returns_parse_error() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[request]\ntimeout = \"soon\"\n",
    )
    .unwrap();

    // WHEN
    let result = CoreApiConfig::load(dir.path());

    // THEN
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies every validation rule rejects its bad input.
///
/// **WHY THIS MATTERS**: Validation runs on load and save; a hole here lets a broken
/// config reach the HTTP layer where the failure is much harder to diagnose.
///
/// **BUG THIS CATCHES**: Would catch any single rule being removed or inverted.
#[test]
fn given_invalid_values_when_validate_called_then_each_is_rejected() {
    // GIVEN
    let cases: Vec<(&str, Box<dyn Fn(&mut CoreApiConfig)>)> = vec![
        ("version zero", Box::new(|c| c.version = 0)),
        ("future version", Box::new(|c| c.version = 2)),
        ("empty network", Box::new(|c| c.network = "  ".to_string())),
        ("no nodes", Box::new(|c| c.nodes.clear())),
        (
            "duplicate names",
            Box::new(|c| {
                let duplicate = c.nodes[0].clone();
                c.nodes.push(duplicate);
            }),
        ),
        (
            "bad url",
            Box::new(|c| c.nodes[0].core_api_address = "ftp://node/core".to_string()),
        ),
        ("zero weighting", Box::new(|c| c.nodes[0].request_weighting = 0.0)),
        ("batch zero", Box::new(|c| c.stream.max_batch_size = 0)),
        ("batch too big", Box::new(|c| c.stream.max_batch_size = 10_001)),
        (
            "inverted delays",
            Box::new(|c| c.request.initial_retry_delay = Duration::from_secs(5)),
        ),
    ];

    for (name, mutate) in cases {
        let mut config = CoreApiConfig::default();
        mutate(&mut config);

        // WHEN
        let result = config.validate();

        // THEN
        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "{name} should be rejected, got {result:?}"
        );
    }
}

/// **VALUE**: Verifies the batch size bounds are inclusive.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one turning `..=` into `..`.
#[test]
fn given_batch_size_at_bounds_when_validate_called_then_accepted() {
    for size in [1, 10_000] {
        // GIVEN
        let mut config = CoreApiConfig::default();
        config.stream.max_batch_size = size;

        // WHEN / THEN
        assert!(config.validate().is_ok(), "batch size {size} should be valid");
    }
}

/// **VALUE**: Verifies env overrides replace network and nodes.
///
/// **WHY THIS MATTERS**: Containers configure the CLI purely through env vars.
///
/// **BUG THIS CATCHES**: Would catch overrides being read but not applied, or
/// `CORE_API_URL` being appended to the node list instead of replacing it.
#[test]
fn given_env_overrides_when_applied_then_network_and_single_node_replaced() {
    // GIVEN
    let mut config = two_node_config();
    let lookup = lookup_from(&[
        ("CORE_API_URL", "https://stokenet.example.com/core"),
        ("CORE_API_NETWORK", "stokenet"),
    ]);

    // WHEN
    config.apply_env_overrides(lookup).unwrap();

    // THEN
    assert_eq!(config.network, "stokenet");
    assert_eq!(config.nodes.len(), 1);
    assert_eq!(config.nodes[0].name, "env");
    assert_eq!(
        config.nodes[0].core_api_address,
        "https://stokenet.example.com/core"
    );
}

/// **VALUE**: Verifies an absent variable leaves the config untouched.
///
/// **BUG THIS CATCHES**: Would catch overrides clearing the node list when unset.
#[test]
fn given_no_env_vars_when_overrides_applied_then_config_unchanged() {
    // GIVEN
    let mut config = two_node_config();
    let before = config.clone();

    // WHEN
    config.apply_env_overrides(lookup_from(&[])).unwrap();

    // THEN
    assert_eq!(config, before);
}

/// **VALUE**: Verifies overrides are validated like file values.
///
/// **BUG THIS CATCHES**: Would catch an env-supplied URL bypassing the http(s) check.
#[test]
fn given_invalid_env_url_when_overrides_applied_then_validation_fails() {
    // GIVEN
    let mut config = CoreApiConfig::default();

    // WHEN
    let result = config.apply_env_overrides(lookup_from(&[("CORE_API_URL", "localhost:3333")]));

    // THEN
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// **VALUE**: Verifies an empty env value is reported with the variable name.
///
/// **BUG THIS CATCHES**: Would catch `CORE_API_NETWORK=""` silently blanking the network.
#[test]
fn given_empty_env_network_when_overrides_applied_then_environment_error() {
    // GIVEN
    let mut config = CoreApiConfig::default();

    // WHEN
    let result = config.apply_env_overrides(lookup_from(&[("CORE_API_NETWORK", "")]));

    // THEN
    match result {
        Err(ConfigError::EnvironmentError { variable, .. }) => {
            assert_eq!(variable, "CORE_API_NETWORK")
        }
        other => panic!("expected EnvironmentError, got {other:?}"),
    }
}

/// **VALUE**: Verifies node auth tokens resolve through the named variable.
///
/// **WHY THIS MATTERS**: Tokens never live in the TOML file; a wrong lookup means
/// every request to a protected node fails with 401.
///
/// **BUG THIS CATCHES**: Would catch a node without `auth_token_env` erroring, or a
/// configured-but-missing variable silently sending unauthenticated requests.
#[test]
fn given_auth_token_env_when_token_resolved_then_secret_comes_from_named_variable() {
    // GIVEN
    let mut node = CoreApiNodeConfig::new("gateway", "https://node.example.com/core");
    let lookup = lookup_from(&[("GATEWAY_TOKEN", "s3cret")]);

    // WHEN / THEN
    assert!(node.auth_token_with(&lookup).unwrap().is_none());

    node.auth_token_env = Some("GATEWAY_TOKEN".to_string());
    let token = node.auth_token_with(&lookup).unwrap().unwrap();
    assert_eq!(token.expose(), "s3cret");

    node.auth_token_env = Some("MISSING_TOKEN".to_string());
    assert!(matches!(
        node.auth_token_with(&lookup),
        Err(ConfigError::EnvironmentError { .. })
    ));
}

/// **VALUE**: Verifies node selection helpers honour the enable flags.
///
/// **BUG THIS CATCHES**: Would catch disabled nodes being health-checked or archive-only
/// nodes being used to read the transaction stream.
#[test]
fn given_mixed_nodes_when_selecting_then_flags_are_respected() {
    // GIVEN
    let config = two_node_config();

    // WHEN
    let enabled: Vec<&str> = config.enabled_nodes().map(|n| n.name.as_str()).collect();
    let indexing: Vec<&str> = config.indexing_nodes().map(|n| n.name.as_str()).collect();

    // THEN
    assert_eq!(enabled, vec!["primary", "archive"]);
    assert_eq!(indexing, vec!["primary"]);
    assert_eq!(config.node("offline").map(|n| n.enabled), Some(false));
    assert!(config.node("nope").is_none());
}

/// **VALUE**: Verifies weighted selection splits the unit interval by `request_weighting`.
///
/// **WHY THIS MATTERS**: Operators weight a beefy node above a small one to spread load;
/// equal picks would overload the small node.
///
/// **BUG THIS CATCHES**: Would catch weights being ignored, disabled nodes receiving
/// requests, or a roll at the top of the range selecting nothing.
#[test]
fn given_weighted_nodes_when_rolling_then_picks_proportionally() {
    // GIVEN: primary weighted 3, archive weighted 1, offline disabled
    let mut config = two_node_config();
    config.nodes[0].request_weighting = 3.0;
    config.nodes[1].request_weighting = 1.0;
    config.nodes[2].request_weighting = 100.0;
    let pick = |roll: f64| config.weighted_node(roll).map(|n| n.name.as_str());

    // WHEN / THEN: the first three quarters go to primary, the rest to archive
    assert_eq!(pick(0.0), Some("primary"));
    assert_eq!(pick(0.74), Some("primary"));
    assert_eq!(pick(0.75), Some("archive"));
    assert_eq!(pick(0.999), Some("archive"));
    assert_eq!(pick(1.0), Some("archive"));
}

/// **VALUE**: Verifies indexing selection never yields a node excluded from indexing.
///
/// **BUG THIS CATCHES**: Would catch the stream reading from a node flagged
/// `disabled_for_transaction_indexing` because of its weight.
#[test]
fn given_indexing_excluded_node_when_rolling_for_indexing_then_never_chosen() {
    // GIVEN: the archive node carries almost all of the weight
    let mut config = two_node_config();
    config.nodes[1].request_weighting = 1_000.0;

    // WHEN
    let picks: Vec<&str> = [0.0, 0.5, 0.99]
        .into_iter()
        .filter_map(|roll| config.weighted_indexing_node(roll))
        .map(|n| n.name.as_str())
        .collect();

    // THEN
    assert_eq!(picks, vec!["primary", "primary", "primary"]);
}

/// **VALUE**: Verifies selection over an empty set yields no node.
///
/// **BUG THIS CATCHES**: Would catch a panic or a disabled node being returned when
/// every node is switched off.
#[test]
fn given_all_nodes_disabled_when_rolling_then_none() {
    // GIVEN
    let mut config = two_node_config();
    for node in &mut config.nodes {
        node.enabled = false;
    }

    // WHEN / THEN
    assert!(config.weighted_node(0.3).is_none());
    assert!(config.weighted_indexing_node(0.3).is_none());
}
