use serde::{Deserialize, Serialize};

use crate::Labels;

/// Declarative service specification submitted to the orchestration platform.
///
/// One definition is built per eligible network. All naming fields are derived
/// from the network-scoped environment; nothing here is set independently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    /// Service name, `<stack>_<network>_<service>`.
    pub name: String,
    /// Container image.
    pub image: String,
    /// Command run inside the container.
    pub command: Vec<String>,
    /// Container environment as `KEY=VALUE` assignments, in environment order.
    pub env: Vec<String>,
    /// Number of replicas to schedule.
    pub replicas: u64,
    /// Network the service attaches to.
    pub network: String,
    /// DNS aliases on that network.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Service labels.
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}
