use crate::health::{NodeHealth, classify, summarize};

/// **VALUE**: Verifies the lag threshold is exclusive.
///
/// **WHY THIS MATTERS**: A node exactly `max_lag` behind is still considered synced;
/// flipping this makes a whole cluster flap between states at the boundary.
///
/// **BUG THIS CATCHES**: Would catch `>` becoming `>=`.
#[test]
fn given_state_versions_when_classified_then_lag_threshold_is_exclusive() {
    // GIVEN
    let top = 1_000;
    let max_lag = 100;

    // WHEN / THEN
    assert_eq!(classify(Some(1_000), top, max_lag), NodeHealth::HealthyAndSynced);
    assert_eq!(classify(Some(900), top, max_lag), NodeHealth::HealthyAndSynced);
    assert_eq!(classify(Some(899), top, max_lag), NodeHealth::HealthyButLagging);
    assert_eq!(classify(None, top, max_lag), NodeHealth::Unhealthy);
}

/// **VALUE**: Verifies the top of ledger is the highest reported version.
///
/// **BUG THIS CATCHES**: Would catch the first node's version being used as the
/// reference, which would mark every node ahead of it as synced and itself as synced too.
#[test]
fn given_mixed_probes_when_summarized_then_top_of_ledger_and_counts_are_correct() {
    // GIVEN
    let probes = vec![
        ("slow".to_string(), Ok(500)),
        ("fast".to_string(), Ok(1_000)),
        ("down".to_string(), Err("connection refused".to_string())),
        ("close".to_string(), Ok(990)),
    ];

    // WHEN
    let summary = summarize(probes, 100);

    // THEN
    assert_eq!(summary.top_of_ledger_state_version, Some(1_000));
    assert_eq!(summary.synced_count(), 2);
    assert_eq!(summary.lagging_count(), 1);
    assert_eq!(summary.unhealthy_count(), 1);
    assert!(!summary.has_synced_majority());
    let synced: Vec<&str> = summary.synced_nodes().map(|n| n.node_name.as_str()).collect();
    assert_eq!(synced, vec!["fast", "close"]);
    assert_eq!(
        summary.nodes[2].error.as_deref(),
        Some("connection refused")
    );
}

/// **VALUE**: Verifies an all-failed probe set reports no ledger tip.
///
/// **BUG THIS CATCHES**: Would catch a default tip of 0 marking unreachable nodes synced.
#[test]
fn given_all_probes_failed_when_summarized_then_every_node_unhealthy() {
    // GIVEN
    let probes = vec![
        ("a".to_string(), Err("timeout".to_string())),
        ("b".to_string(), Err("timeout".to_string())),
    ];

    // WHEN
    let summary = summarize(probes, 100);

    // THEN
    assert_eq!(summary.top_of_ledger_state_version, None);
    assert_eq!(summary.unhealthy_count(), 2);
    assert!(summary.nodes.iter().all(|n| !n.health.is_healthy()));
}
