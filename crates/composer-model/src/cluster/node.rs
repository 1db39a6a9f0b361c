use std::fmt;

use serde::{Deserialize, Serialize};

/// Cluster role of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeRole {
    /// Control-plane node.
    Manager,
    /// Workload-only node.
    Worker,
    /// Any role string the platform reports that is not recognised.
    Other(String),
}

impl NodeRole {
    pub fn as_str(&self) -> &str {
        match self {
            NodeRole::Manager => "manager",
            NodeRole::Worker => "worker",
            NodeRole::Other(s) => s,
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, NodeRole::Manager)
    }
}

impl From<&str> for NodeRole {
    fn from(s: &str) -> Self {
        match s {
            "manager" => NodeRole::Manager,
            "worker" => NodeRole::Worker,
            other => NodeRole::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeRole {
    fn from(s: String) -> Self {
        NodeRole::from(s.as_str())
    }
}

impl From<NodeRole> for String {
    fn from(role: NodeRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node record returned by the platform's node listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub hostname: String,
    pub role: NodeRole,
}

impl NodeInfo {
    pub fn new(hostname: impl Into<String>, role: impl Into<NodeRole>) -> Self {
        Self {
            hostname: hostname.into(),
            role: role.into(),
        }
    }
}
