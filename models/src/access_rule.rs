//! Access rules guarding methods, roles and the owner of an entity.

use crate::non_fungible::NonFungibleGlobalId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccessRule {
    #[serde(alias = "AllowAllAccessRule")]
    AllowAll,
    #[serde(alias = "DenyAllAccessRule")]
    DenyAll,
    #[serde(alias = "ProtectedAccessRule")]
    Protected { access_rule: AccessRuleNode },
}

/// A node in the access rule tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccessRuleNode {
    #[serde(alias = "ProofAccessRuleNode")]
    ProofRule { proof_rule: ProofRule },
    #[serde(alias = "AnyOfAccessRuleNode")]
    AnyOf { access_rules: Vec<AccessRuleNode> },
    #[serde(alias = "AllOfAccessRuleNode")]
    AllOf { access_rules: Vec<AccessRuleNode> },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProofRule {
    #[serde(alias = "RequireProofRule")]
    Require { requirement: Requirement },
    #[serde(alias = "AmountOfProofRule")]
    AmountOf {
        /// Decimal string.
        amount: String,
        resource: String,
    },
    #[serde(alias = "CountOfProofRule")]
    CountOf { count: i32, list: Vec<Requirement> },
    #[serde(alias = "AllOfProofRule")]
    AllOf { list: Vec<Requirement> },
    #[serde(alias = "AnyOfProofRule")]
    AnyOf { list: Vec<Requirement> },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Requirement {
    #[serde(alias = "ResourceRequirement")]
    Resource { resource: String },
    #[serde(alias = "NonFungibleRequirement")]
    NonFungible { non_fungible: NonFungibleGlobalId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnerRoleUpdater {
    None,
    Owner,
    Object,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerRole {
    pub rule: AccessRule,
    pub updater: OwnerRoleUpdater,
}

impl AccessRule {
    pub fn protected(node: AccessRuleNode) -> Self {
        AccessRule::Protected { access_rule: node }
    }

    /// Resource addresses a proof of which can contribute to satisfying this rule.
    pub fn referenced_resources(&self) -> Vec<&str> {
        let mut resources = Vec::new();
        if let AccessRule::Protected { access_rule } = self {
            collect_node_resources(access_rule, &mut resources);
        }
        resources
    }
}

fn collect_node_resources<'a>(node: &'a AccessRuleNode, out: &mut Vec<&'a str>) {
    match node {
        AccessRuleNode::ProofRule { proof_rule } => match proof_rule {
            ProofRule::Require { requirement } => out.push(requirement.resource_address()),
            ProofRule::AmountOf { resource, .. } => out.push(resource),
            ProofRule::CountOf { list, .. } | ProofRule::AllOf { list } | ProofRule::AnyOf { list } => {
                out.extend(list.iter().map(Requirement::resource_address));
            }
        },
        AccessRuleNode::AnyOf { access_rules } | AccessRuleNode::AllOf { access_rules } => {
            for rule in access_rules {
                collect_node_resources(rule, out);
            }
        }
    }
}

impl Requirement {
    pub fn resource_address(&self) -> &str {
        match self {
            Requirement::Resource { resource } => resource,
            Requirement::NonFungible { non_fungible } => &non_fungible.resource_address,
        }
    }
}
