//! Decoding of docker CLI output.
use composer_model::{NetworkInfo, NodeInfo};
use serde::Deserialize;

/// One line of `docker network ls --format '{{json .}}'`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NetworkRow {
    name: String,
    #[serde(default)]
    driver: String,
}

/// One element of `docker node inspect`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NodeInspect {
    #[serde(default)]
    spec: NodeSpec,
    #[serde(default)]
    description: NodeDescription,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NodeSpec {
    #[serde(default)]
    role: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NodeDescription {
    #[serde(default)]
    hostname: String,
}

/// Networks from line-delimited JSON, in listing order. Blank lines are skipped.
pub fn decode_networks(stdout: &str) -> Result<Vec<NetworkInfo>, serde_json::Error> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let row: NetworkRow = serde_json::from_str(line)?;
            Ok(NetworkInfo::new(row.name, row.driver))
        })
        .collect()
}

/// Node ids from `docker node ls -q`.
pub fn decode_node_ids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Nodes from the JSON array printed by `docker node inspect`.
pub fn decode_nodes(stdout: &str) -> Result<Vec<NodeInfo>, serde_json::Error> {
    let nodes: Vec<NodeInspect> = serde_json::from_str(stdout.trim())?;
    Ok(nodes
        .into_iter()
        .map(|n| NodeInfo::new(n.description.hostname, n.spec.role))
        .collect())
}
