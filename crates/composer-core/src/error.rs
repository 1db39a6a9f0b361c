use thiserror::Error;

use crate::{config::ConfigError, metrics::Stage, platform::PlatformError};

/// Fatal failure of a planning run. None of these are recovered locally.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("startup failed due to a config error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to list {}: {source}", .stage.as_label())]
    Discovery {
        stage: Stage,
        #[source]
        source: PlatformError,
    },

    #[error("no {} found", .0.eligible_noun())]
    EmptyResult(Stage),

    #[error("unable to create service {service}: {source}")]
    Deployment {
        service: String,
        #[source]
        source: PlatformError,
    },
}

impl CoreError {
    /// Pipeline stage the error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            CoreError::Config(_) => Stage::Config,
            CoreError::Discovery { stage, .. } => *stage,
            CoreError::EmptyResult(stage) => *stage,
            CoreError::Deployment { .. } => Stage::Deploy,
        }
    }
}
