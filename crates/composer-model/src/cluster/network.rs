use serde::{Deserialize, Serialize};

use crate::DRIVER_OVERLAY;

/// Network record returned by the platform's network listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    /// Network name, unique per deployment target.
    pub name: String,
    /// Driver type (`overlay`, `bridge`, `host`, ...).
    pub driver: String,
}

impl NetworkInfo {
    pub fn new(name: impl Into<String>, driver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver: driver.into(),
        }
    }

    /// Returns `true` if the network spans the cluster.
    pub fn is_overlay(&self) -> bool {
        self.driver == DRIVER_OVERLAY
    }
}
