use std::sync::Arc;

/// Pipeline stage, used to label metrics and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Configuration resolution.
    Config,
    /// Network discovery.
    Networks,
    /// Node discovery.
    Nodes,
    /// Service creation.
    Deploy,
}

impl Stage {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            Stage::Config => "config",
            Stage::Networks => "networks",
            Stage::Nodes => "nodes",
            Stage::Deploy => "deploy",
        }
    }

    /// What an empty result of this stage is missing.
    pub fn eligible_noun(&self) -> &'static str {
        match self {
            Stage::Networks => "overlay networks",
            Stage::Nodes => "useable nodes",
            Stage::Config => "configuration values",
            Stage::Deploy => "services",
        }
    }
}

/// Backend metrics collection interface.
///
/// Implementations are injected into [`crate::Composer`] and called once per
/// pipeline event. Every method must be cheap and must not fail.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a discovery result.
    ///
    /// # Arguments
    /// - `stage`: `Networks` or `Nodes`
    /// - `listed`: records returned by the platform
    /// - `eligible`: records left after filtering
    fn record_discovered(&self, stage: Stage, listed: usize, eligible: usize);

    /// Record the size of the planned worklist.
    fn record_planned(&self, services: usize);

    /// Record one successfully created service and how long the call took.
    fn record_service_created(&self, duration_ms: u64);

    /// Record the stage at which a run aborted.
    fn record_failure(&self, stage: Stage);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
