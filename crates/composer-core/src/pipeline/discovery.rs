//! Discovery of eligible networks and nodes.
use std::collections::BTreeSet;

use composer_model::{NetworkInfo, NodeInfo};
use tracing::{debug, instrument, trace};

use crate::{error::CoreError, metrics::Stage, platform::Platform};

/// Eligible names from one listing, with the size of the raw listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    pub listed: usize,
    pub names: Vec<String>,
}

impl Discovered {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Keep overlay networks that are not on the avoid-list.
///
/// Platform order is preserved; it decides deployment order. A name reported
/// twice is kept twice, and its second service then fails to create.
pub fn filter_networks(list: Vec<NetworkInfo>, avoid: &BTreeSet<String>) -> Vec<String> {
    let mut eligible: Vec<String> = Vec::new();
    for network in list {
        if !network.is_overlay() {
            trace!(network = %network.name, driver = %network.driver, "skipping non-overlay network");
            continue;
        }
        if avoid.contains(&network.name) {
            trace!(network = %network.name, "skipping avoided network");
            continue;
        }
        eligible.push(network.name);
    }
    eligible
}

/// Hostnames of nodes that can run replicas.
///
/// Managers are dropped unless `avoid_masters` is `0`.
pub fn filter_nodes(list: Vec<NodeInfo>, avoid_masters: i64) -> Vec<String> {
    list.into_iter()
        .filter(|node| {
            let keep = !(node.role.is_manager() && avoid_masters != 0);
            if !keep {
                trace!(node = %node.hostname, "skipping manager node");
            }
            keep
        })
        .map(|node| node.hostname)
        .collect()
}

/// List networks on the platform and keep the eligible ones.
#[instrument(level = "debug", skip_all, fields(platform = platform.name()))]
pub async fn discover_networks<P: Platform + ?Sized>(
    platform: &P,
    avoid: &BTreeSet<String>,
) -> Result<Discovered, CoreError> {
    let list = platform
        .list_networks()
        .await
        .map_err(|source| CoreError::Discovery {
            stage: Stage::Networks,
            source,
        })?;
    let listed = list.len();
    let names = filter_networks(list, avoid);
    debug!(listed, eligible = names.len(), "networks discovered");
    Ok(Discovered { listed, names })
}

/// List nodes on the platform and keep the eligible hostnames.
#[instrument(level = "debug", skip_all, fields(platform = platform.name()))]
pub async fn discover_nodes<P: Platform + ?Sized>(
    platform: &P,
    avoid_masters: i64,
) -> Result<Discovered, CoreError> {
    let list = platform
        .list_nodes()
        .await
        .map_err(|source| CoreError::Discovery {
            stage: Stage::Nodes,
            source,
        })?;
    let listed = list.len();
    let names = filter_nodes(list, avoid_masters);
    debug!(listed, eligible = names.len(), "nodes discovered");
    Ok(Discovered { listed, names })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;
    use crate::testing::FakePlatform;

    fn avoid(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn non_overlay_networks_are_dropped_regardless_of_avoid_list() {
        let list = vec![
            NetworkInfo::new("bridge", "bridge"),
            NetworkInfo::new("host", "host"),
            NetworkInfo::new("net-a", "overlay"),
        ];
        assert_eq!(filter_networks(list, &avoid(&[])), vec!["net-a"]);
    }

    #[test]
    fn avoided_overlay_networks_are_dropped() {
        let list = vec![
            NetworkInfo::new("ingress", "overlay"),
            NetworkInfo::new("net-a", "overlay"),
            NetworkInfo::new("monitoring", "overlay"),
        ];
        assert_eq!(
            filter_networks(list, &avoid(&["ingress", "monitoring"])),
            vec!["net-a"]
        );
    }

    #[test]
    fn network_order_follows_platform() {
        let list = vec![
            NetworkInfo::new("net-c", "overlay"),
            NetworkInfo::new("net-a", "overlay"),
            NetworkInfo::new("net-b", "overlay"),
        ];
        assert_eq!(
            filter_networks(list, &avoid(&["ingress"])),
            vec!["net-c", "net-a", "net-b"]
        );
    }

    #[test]
    fn same_named_networks_are_all_kept() {
        let list = vec![
            NetworkInfo::new("net-a", "overlay"),
            NetworkInfo::new("net-a", "overlay"),
        ];
        assert_eq!(filter_networks(list, &avoid(&[])), vec!["net-a", "net-a"]);
    }

    #[test]
    fn managers_excluded_when_avoided() {
        let list = vec![NodeInfo::new("m1", "manager"), NodeInfo::new("w1", "worker")];
        assert_eq!(filter_nodes(list, 1), vec!["w1"]);
    }

    #[test]
    fn managers_included_when_allowed() {
        let list = vec![NodeInfo::new("m1", "manager"), NodeInfo::new("w1", "worker")];
        assert_eq!(filter_nodes(list, 0), vec!["m1", "w1"]);
    }

    #[test]
    fn any_nonzero_switch_excludes_managers() {
        let list = vec![
            NodeInfo::new("m1", "manager"),
            NodeInfo::new("x1", "unknown"),
        ];
        assert_eq!(filter_nodes(list.clone(), -1), vec!["x1"]);
        assert_eq!(filter_nodes(list, 42), vec!["x1"]);
    }

    #[tokio::test]
    async fn discover_networks_uses_platform_listing() {
        let platform = FakePlatform::new()
            .with_networks(&[("ingress", "overlay"), ("net-a", "overlay"), ("docker_gwbridge", "bridge")]);
        let nets = discover_networks(&platform, &avoid(&["ingress"])).await.unwrap();
        assert_eq!(nets.listed, 3);
        assert_eq!(nets.names, vec!["net-a"]);
    }

    #[tokio::test]
    async fn discover_networks_maps_platform_failure() {
        let platform = FakePlatform::new()
            .failing_networks(PlatformError::Unavailable("socket closed".into()));
        let err = discover_networks(&platform, &avoid(&[])).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Discovery {
                stage: Stage::Networks,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn discover_nodes_maps_platform_failure() {
        let platform =
            FakePlatform::new().failing_nodes(PlatformError::Rejected("not a swarm manager".into()));
        let err = discover_nodes(&platform, 1).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Discovery {
                stage: Stage::Nodes,
                ..
            }
        ));
    }
}
