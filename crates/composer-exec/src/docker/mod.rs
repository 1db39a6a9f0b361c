//! [`Platform`] implementation backed by the docker CLI of a swarm manager.
mod args;
pub use args::service_create_args;

mod command;
pub use command::DockerCli;

mod decode;
pub use decode::{decode_networks, decode_node_ids, decode_nodes};

use std::time::Duration;

use async_trait::async_trait;
use composer_core::{
    ConfigError, ConfigSource, Platform, PlatformError, config::resolve_int,
};
use composer_model::{NetworkInfo, NodeInfo, ServiceDefinition, ServiceId};
use tracing::{debug, instrument};

use crate::ExecError;

pub const KEY_DOCKER_BIN: &str = "DOCKER_BIN";
pub const KEY_DOCKER_TIMEOUT_SECONDS: &str = "DOCKER_TIMEOUT_SECONDS";

pub const DEFAULT_DOCKER_BIN: &str = "docker";
pub const DEFAULT_DOCKER_TIMEOUT_SECONDS: i64 = 30;

/// Docker adapter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerConfig {
    /// Path or name of the docker binary.
    pub bin: String,
    /// Upper bound for a single CLI invocation.
    pub timeout: Duration,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            bin: DEFAULT_DOCKER_BIN.to_string(),
            timeout: Duration::from_secs(DEFAULT_DOCKER_TIMEOUT_SECONDS as u64),
        }
    }
}

impl DockerConfig {
    /// Read `DOCKER_BIN` and `DOCKER_TIMEOUT_SECONDS`, defaulting when absent or empty.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let bin = source
            .lookup(KEY_DOCKER_BIN)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DOCKER_BIN.to_string());

        let secs = resolve_int(
            source,
            KEY_DOCKER_TIMEOUT_SECONDS,
            DEFAULT_DOCKER_TIMEOUT_SECONDS,
        )?;
        if secs <= 0 {
            return Err(ConfigError::InvalidValue {
                key: KEY_DOCKER_TIMEOUT_SECONDS,
                reason: format!("{secs}: must be positive"),
            });
        }

        Ok(Self {
            bin,
            timeout: Duration::from_secs(secs as u64),
        })
    }
}

/// Swarm platform driven through `docker` subcommands.
#[derive(Debug, Clone)]
pub struct DockerPlatform {
    cli: DockerCli,
}

impl DockerPlatform {
    pub fn new(config: DockerConfig) -> Self {
        Self {
            cli: DockerCli::new(config.bin, config.timeout),
        }
    }

    pub fn cli(&self) -> &DockerCli {
        &self.cli
    }

    async fn networks(&self) -> Result<Vec<NetworkInfo>, ExecError> {
        let args = to_args(&["network", "ls", "--no-trunc", "--format", "{{json .}}"]);
        let out = self.cli.run_success(&args).await?;
        decode_networks(&out).map_err(|e| ExecError::decode(self.cli.label(&args), e))
    }

    async fn nodes(&self) -> Result<Vec<NodeInfo>, ExecError> {
        let ids = decode_node_ids(&self.cli.run_success(&to_args(&["node", "ls", "-q"])).await?);
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        debug!(nodes = ids.len(), "inspecting nodes");

        let mut args = to_args(&["node", "inspect"]);
        args.extend(ids);
        let out = self.cli.run_success(&args).await?;
        decode_nodes(&out).map_err(|e| ExecError::decode(self.cli.label(&args), e))
    }

    async fn create(&self, def: &ServiceDefinition) -> Result<ServiceId, ExecError> {
        let args = service_create_args(def);
        let out = self.cli.run_success(&args).await?;
        let id = out.trim();
        if id.is_empty() {
            return Err(ExecError::decode(self.cli.label(&args), "empty service id"));
        }
        Ok(id.to_string())
    }
}

#[async_trait]
impl Platform for DockerPlatform {
    fn name(&self) -> &'static str {
        "docker"
    }

    #[instrument(level = "trace", skip_all)]
    async fn list_networks(&self) -> Result<Vec<NetworkInfo>, PlatformError> {
        Ok(self.networks().await?)
    }

    #[instrument(level = "trace", skip_all)]
    async fn list_nodes(&self) -> Result<Vec<NodeInfo>, PlatformError> {
        Ok(self.nodes().await?)
    }

    #[instrument(level = "trace", skip_all, fields(service = %def.name))]
    async fn create_service(&self, def: &ServiceDefinition) -> Result<ServiceId, PlatformError> {
        Ok(self.create(def).await?)
    }
}

fn to_args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let cfg = DockerConfig::from_source(&[("IMAGE", "img")]).unwrap();
        assert_eq!(cfg, DockerConfig::default());
        assert_eq!(cfg.bin, "docker");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_reads_overrides() {
        let cfg = DockerConfig::from_source(&[
            ("DOCKER_BIN", "/usr/local/bin/docker"),
            ("DOCKER_TIMEOUT_SECONDS", "5"),
        ])
        .unwrap();
        assert_eq!(cfg.bin, "/usr/local/bin/docker");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn config_rejects_bad_timeout() {
        assert!(DockerConfig::from_source(&[("DOCKER_TIMEOUT_SECONDS", "soon")]).is_err());
        assert!(DockerConfig::from_source(&[("DOCKER_TIMEOUT_SECONDS", "0")]).is_err());
    }

    #[tokio::test]
    async fn missing_binary_surfaces_as_unavailable() {
        let platform = DockerPlatform::new(DockerConfig {
            bin: "/nonexistent/docker-binary".into(),
            timeout: Duration::from_secs(5),
        });
        let err = platform.list_networks().await.unwrap_err();
        assert!(matches!(err, PlatformError::Unavailable(_)));
    }
}
