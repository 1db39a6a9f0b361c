//! Boundary to the orchestration platform.
//!
//! The pipeline consumes exactly three operations. Implementations are passed
//! in explicitly and live for the duration of a run.
mod error;
pub use error::PlatformError;

use async_trait::async_trait;
use composer_model::{NetworkInfo, NodeInfo, ServiceDefinition, ServiceId};

/// Orchestration platform able to list cluster resources and create services.
///
/// Every call is awaited to completion before the pipeline issues the next one.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Platform name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// All networks, in the order the platform reports them.
    async fn list_networks(&self) -> Result<Vec<NetworkInfo>, PlatformError>;

    /// All cluster nodes, in the order the platform reports them.
    async fn list_nodes(&self) -> Result<Vec<NodeInfo>, PlatformError>;

    /// Create one service and return its platform identifier.
    async fn create_service(&self, def: &ServiceDefinition) -> Result<ServiceId, PlatformError>;
}
