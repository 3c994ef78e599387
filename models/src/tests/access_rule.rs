use crate::access_rule::{OwnerRoleUpdater, ProofRule};
use crate::{AccessRule, AccessRuleNode, OwnerRole, Requirement};

use serde_json::json;

/// **VALUE**: Verifies nested access rule trees decode recursively.
///
/// **WHY THIS MATTERS**: Owner roles are frequently `AnyOf` badge sets; a decoding failure
/// hides who controls an entity.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Recursion through `AccessRuleNode` breaks
/// - Unit variants such as `AllowAll` stop decoding under a tag
#[test]
fn given_nested_rule_json_when_deserializing_then_builds_tree() {
    // GIVEN: A protected rule requiring either of two resources
    let body = json!({
        "rule": {
            "type": "Protected",
            "access_rule": {
                "type": "AnyOf",
                "access_rules": [
                    { "type": "ProofRule", "proof_rule": { "type": "Require", "requirement": { "type": "Resource", "resource": "resource_a" } } },
                    { "type": "ProofRule", "proof_rule": { "type": "AmountOf", "amount": "10", "resource": "resource_b" } }
                ]
            }
        },
        "updater": "Owner"
    });

    // WHEN: Deserializing an owner role
    let owner_role: OwnerRole = serde_json::from_value(body).expect("valid owner role");

    // THEN: Both resources are referenced and the updater is typed
    assert_eq!(owner_role.updater, OwnerRoleUpdater::Owner);
    assert_eq!(
        owner_role.rule.referenced_resources(),
        vec!["resource_a", "resource_b"]
    );
}

/// **VALUE**: Verifies open and closed rules serialize to bare tags.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Unit variants serialize with extra fields or as plain strings
#[test]
fn given_allow_all_rule_when_serializing_then_emits_only_tag() {
    // GIVEN: An allow-all rule
    let rule = AccessRule::AllowAll;

    // WHEN: Serializing
    let value = serde_json::to_value(&rule).expect("serializable");

    // THEN: Only the type tag is present
    assert_eq!(value, json!({ "type": "AllowAll" }));
    assert!(rule.referenced_resources().is_empty());
}

/// **VALUE**: Verifies count-of rules report every listed requirement.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Non-fungible requirements are skipped when collecting resources
#[test]
fn given_count_of_rule_when_collecting_resources_then_includes_all_requirements() {
    // GIVEN: A 1-of-2 rule mixing a resource and a non-fungible requirement
    let rule = AccessRule::protected(AccessRuleNode::ProofRule {
        proof_rule: ProofRule::CountOf {
            count: 1,
            list: vec![
                Requirement::Resource {
                    resource: String::from("resource_x"),
                },
                Requirement::NonFungible {
                    non_fungible: serde_json::from_value(json!({
                        "resource_address": "resource_y",
                        "local_id": { "simple_rep": "#1#", "id_type": "Integer", "sbor_hex": "5c01" }
                    }))
                    .expect("valid global id"),
                },
            ],
        },
    });

    // WHEN: Collecting referenced resources
    let resources = rule.referenced_resources();

    // THEN: Both resources appear
    assert_eq!(resources, vec!["resource_x", "resource_y"]);
}
