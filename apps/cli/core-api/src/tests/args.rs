// Argument parsing for the `core-api` binary

use crate::args::{Cli, Command};

use clap::Parser;
use log::LevelFilter;

/// **VALUE**: Verifies global flags are accepted after the subcommand.
///
/// **WHY THIS MATTERS**: Users type `core-api network-status --node archive`; if the
/// flags are not global, clap rejects that ordering.
///
/// **BUG THIS CATCHES**: Would catch `global = true` being dropped from a flag.
#[test]
fn given_global_flags_after_subcommand_when_parsed_then_accepted() {
    // GIVEN / WHEN
    let cli = Cli::try_parse_from([
        "core-api",
        "network-status",
        "--node",
        "archive",
        "--config",
        "/tmp/core-api.toml",
        "-vv",
    ])
    .unwrap();

    // THEN
    assert_eq!(cli.command, Command::NetworkStatus);
    assert_eq!(cli.node.as_deref(), Some("archive"));
    assert_eq!(
        cli.config.as_deref().and_then(|p| p.to_str()),
        Some("/tmp/core-api.toml")
    );
    assert_eq!(cli.log_level(), LevelFilter::Trace);
}

/// **VALUE**: Verifies stream defaults and explicit values.
///
/// **BUG THIS CATCHES**: Would catch a default of 0 for `--from`, which the node rejects.
#[test]
fn given_stream_subcommand_when_parsed_then_defaults_apply() {
    // GIVEN / WHEN
    let defaults = Cli::try_parse_from(["core-api", "stream"]).unwrap();
    let explicit =
        Cli::try_parse_from(["core-api", "stream", "--from", "500", "--limit", "25"]).unwrap();

    // THEN
    assert_eq!(defaults.command, Command::Stream { from: 1, limit: 10 });
    assert_eq!(explicit.command, Command::Stream { from: 500, limit: 25 });
    assert_eq!(defaults.log_level(), LevelFilter::Info);
}

/// **VALUE**: Verifies subcommands with required values reject missing ones.
///
/// **BUG THIS CATCHES**: Would catch `--hex` or `--intent-hash` becoming optional and
/// empty requests reaching the node.
#[test]
fn given_missing_required_value_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["core-api", "submit"]).is_err());
    assert!(Cli::try_parse_from(["core-api", "transaction-status"]).is_err());
    assert!(Cli::try_parse_from(["core-api"]).is_err());
}

/// **VALUE**: Verifies kebab-case subcommand names.
///
/// **BUG THIS CATCHES**: Would catch a rename attribute changing the public command names.
#[test]
fn given_kebab_case_names_when_parsed_then_map_to_commands() {
    let cases = [
        (vec!["core-api", "network-configuration"], Command::NetworkConfiguration),
        (vec!["core-api", "health", "-v"], Command::Health),
        (
            vec!["core-api", "transaction-status", "--intent-hash", "txid_1"],
            Command::TransactionStatus {
                intent_hash: "txid_1".to_string(),
            },
        ),
        (
            vec!["core-api", "submit", "--hex", "0a0b"],
            Command::Submit {
                hex: "0a0b".to_string(),
            },
        ),
    ];

    for (argv, expected) in cases {
        let cli = Cli::try_parse_from(argv.clone()).unwrap();
        assert_eq!(cli.command, expected, "{argv:?}");
    }
}
