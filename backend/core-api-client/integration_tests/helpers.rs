use core_api_client::CoreApiClient;
use core_api_client::core_api_client::RetryPolicy;

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const NETWORK: &str = "localnet";

/// Retries quickly so failure-path tests stay fast.
pub fn fast_retry(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}

pub fn core_url(server: &MockServer) -> String {
    format!("{}/core", server.uri())
}

pub fn client_for(server: &MockServer) -> CoreApiClient {
    CoreApiClient::new(&core_url(server))
        .unwrap()
        .with_retry_policy(fast_retry(3))
}

pub fn state_identifier(state_version: i64, hash: &str) -> Value {
    json!({
        "state_version": state_version,
        "state_tree_hash": format!("state-{hash}"),
        "transaction_tree_hash": format!("txn-{hash}"),
        "receipt_tree_hash": format!("receipt-{hash}")
    })
}

pub fn network_status(state_version: i64) -> Value {
    json!({
        "pre_genesis_state_identifier": state_identifier(0, "pre"),
        "current_state_identifier": state_identifier(state_version, "current"),
        "current_protocol_version": "babylon-genesis"
    })
}

/// A committed round-update transaction at `state_version`.
pub fn round_update_transaction(state_version: i64, hash: &str) -> Value {
    json!({
        "resultant_state_identifiers": state_identifier(state_version, hash),
        "ledger_transaction": {
            "type": "RoundUpdate",
            "round_update_transaction": {
                "proposer_timestamp": {
                    "unix_timestamp_ms": 1_700_000_000_000_i64,
                    "date_time": "2023-11-14T22:13:20.000Z"
                },
                "epoch": 2,
                "round_in_epoch": state_version,
                "leader_proposal_history": {}
            }
        },
        "receipt": {
            "status": "Succeeded",
            "costing_parameters": {
                "execution_cost_unit_price": "0.00000005",
                "execution_cost_unit_limit": 100_000_000,
                "execution_cost_unit_loan": 4_000_000,
                "finalization_cost_unit_price": "0.00000005",
                "finalization_cost_unit_limit": 50_000_000,
                "xrd_usd_price": "16.666666666666666666",
                "xrd_storage_price": "0.00009536743164",
                "tip_percentage": 0
            },
            "fee_summary": {
                "execution_cost_units_consumed": 0,
                "finalization_cost_units_consumed": 0,
                "xrd_total_execution_cost": "0",
                "xrd_total_finalization_cost": "0",
                "xrd_total_royalty_cost": "0",
                "xrd_total_storage_cost": "0",
                "xrd_total_tipping_cost": "0"
            },
            "state_updates": {
                "deleted_partitions": [],
                "created_substates": [],
                "updated_substates": [],
                "deleted_substates": [],
                "new_global_entities": []
            }
        },
        "proposer_timestamp_ms": 1_700_000_000_000_i64
    })
}

pub fn stream_response(
    from_state_version: i64,
    previous: Option<Value>,
    transactions: Vec<Value>,
    max_ledger_state_version: i64,
) -> Value {
    let mut body = json!({
        "from_state_version": from_state_version,
        "count": transactions.len(),
        "max_ledger_state_version": max_ledger_state_version,
        "transactions": transactions
    });
    if let Some(previous) = previous {
        body["previous_state_identifiers"] = previous;
    }
    body
}

pub fn out_of_bounds_error(max_ledger_state_version: i64) -> Value {
    json!({
        "error_type": "StreamTransactions",
        "code": 400,
        "message": "Requested state version is beyond the ledger",
        "details": {
            "type": "RequestedStateVersionOutOfBounds",
            "max_ledger_state_version": max_ledger_state_version
        }
    })
}
