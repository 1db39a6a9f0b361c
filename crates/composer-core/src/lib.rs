//! Planning and deployment of one pinger service per overlay network.
pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod platform;

#[cfg(test)]
mod testing;

pub use config::{ClientSettings, ConfigError, ConfigSource, ProcessEnv, ResolvedConfig};
pub use error::CoreError;
pub use metrics::{MetricsBackend, MetricsHandle, Stage, noop_metrics};
pub use pipeline::{Composer, DeployReport, Plan, RunOutcome};
pub use platform::{Platform, PlatformError};

pub mod prelude {
    pub use crate::config::{ConfigSource, ResolvedConfig};
    pub use crate::error::CoreError;
    pub use crate::metrics::{MetricsBackend, MetricsHandle, Stage};
    pub use crate::pipeline::{Composer, Plan, RunOutcome};
    pub use crate::platform::{Platform, PlatformError};
}
