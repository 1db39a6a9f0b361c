//! Resolution of scalar configuration with typed defaults.
//!
//! Values are read from any [`ConfigSource`]; absent and empty values fall
//! back to defaults, malformed ones fail with [`ConfigError`].
use std::collections::BTreeSet;

use composer_model::{KEY_AVOID_MASTERS, KEY_AVOID_NETWORKS};
use tracing::debug;

mod error;
pub use error::ConfigError;

mod source;
pub use source::{ConfigSource, ProcessEnv};

/// Network skipped when no avoid-list is configured.
pub const DEFAULT_AVOID_NETWORK: &str = "ingress";

/// Managers are excluded unless told otherwise.
pub const DEFAULT_AVOID_MASTERS: i64 = 1;

pub const KEY_DRY_RUN: &str = "DRY_RUN";
pub const KEY_STARTUP_RETRIES: &str = "STARTUP_RETRIES";
pub const KEY_STARTUP_DELAY_SECONDS: &str = "STARTUP_DELAY_SECONDS";
pub const KEY_STARTUP_RETRIES_DELAY_SECONDS: &str = "STARTUP_RETRIES_DELAY_SECONDS";
pub const KEY_CONNECTION_TIMEOUT_SECONDS: &str = "CONNECTION_TIMEOUT_SECONDS";
pub const KEY_IDLE_CONNECTION_TIMEOUT_SECONDS: &str = "IDLE_CONNECTION_TIMEOUT_SECONDS";
pub const KEY_CYCLE_TIME_SECONDS: &str = "CYCLE_TIME_SECONDS";
pub const KEY_PORT: &str = "PORT";

/// Client-side timing settings carried for the deployed pinger.
///
/// They are validated and reported, but the planning pipeline never acts on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub startup_retries: i64,
    pub startup_delay_secs: i64,
    pub startup_retry_delay_secs: i64,
    pub connection_timeout_secs: i64,
    pub idle_connection_timeout_secs: i64,
    pub cycle_time_secs: i64,
    pub port: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            startup_retries: 1,
            startup_delay_secs: 1,
            startup_retry_delay_secs: 1,
            connection_timeout_secs: 1,
            idle_connection_timeout_secs: 1,
            cycle_time_secs: 10,
            port: "8111".to_string(),
        }
    }
}

impl ClientSettings {
    pub fn resolve<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let d = Self::default();
        Ok(Self {
            startup_retries: resolve_int(source, KEY_STARTUP_RETRIES, d.startup_retries)?,
            startup_delay_secs: resolve_int(source, KEY_STARTUP_DELAY_SECONDS, d.startup_delay_secs)?,
            startup_retry_delay_secs: resolve_int(
                source,
                KEY_STARTUP_RETRIES_DELAY_SECONDS,
                d.startup_retry_delay_secs,
            )?,
            connection_timeout_secs: resolve_int(
                source,
                KEY_CONNECTION_TIMEOUT_SECONDS,
                d.connection_timeout_secs,
            )?,
            idle_connection_timeout_secs: resolve_int(
                source,
                KEY_IDLE_CONNECTION_TIMEOUT_SECONDS,
                d.idle_connection_timeout_secs,
            )?,
            cycle_time_secs: resolve_int(source, KEY_CYCLE_TIME_SECONDS, d.cycle_time_secs)?,
            port: non_empty(source, KEY_PORT).unwrap_or(d.port),
        })
    }
}

/// Configuration of a single planning run. Read-only once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Networks that never receive a service.
    pub avoid_networks: BTreeSet<String>,
    /// `0` makes managers eligible; any other value excludes them.
    pub avoid_masters: i64,
    /// Plan without creating services.
    pub dry_run: bool,
    pub client: ClientSettings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            avoid_networks: default_avoid_networks(),
            avoid_masters: DEFAULT_AVOID_MASTERS,
            dry_run: false,
            client: ClientSettings::default(),
        }
    }
}

impl ResolvedConfig {
    /// Resolve every recognised key from `source`.
    pub fn resolve<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let cfg = Self {
            avoid_networks: resolve_avoid_networks(source.lookup(KEY_AVOID_NETWORKS).as_deref())?,
            avoid_masters: resolve_avoid_masters(source.lookup(KEY_AVOID_MASTERS).as_deref())?,
            dry_run: resolve_int(source, KEY_DRY_RUN, 0)? != 0,
            client: ClientSettings::resolve(source)?,
        };
        debug!(
            avoid_networks = ?cfg.avoid_networks,
            avoid_masters = cfg.avoid_masters,
            dry_run = cfg.dry_run,
            client = ?cfg.client,
            "configuration resolved"
        );
        Ok(cfg)
    }

    /// Returns `true` if manager nodes count towards replicas.
    pub fn masters_eligible(&self) -> bool {
        self.avoid_masters == 0
    }
}

/// Parse a comma-separated avoid-list.
///
/// Absent or empty input yields `{"ingress"}`. Entries are taken literally.
pub fn resolve_avoid_networks(raw: Option<&str>) -> Result<BTreeSet<String>, ConfigError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(default_avoid_networks()),
    };

    let nets: BTreeSet<String> = raw.split(',').map(str::to_owned).collect();
    if nets.is_empty() {
        return Err(ConfigError::EmptyList {
            key: KEY_AVOID_NETWORKS,
        });
    }
    Ok(nets)
}

/// Parse the avoid-masters switch. Absent or empty input yields `1`.
pub fn resolve_avoid_masters(raw: Option<&str>) -> Result<i64, ConfigError> {
    match raw {
        Some(raw) if !raw.is_empty() => parse_int(KEY_AVOID_MASTERS, raw),
        _ => Ok(DEFAULT_AVOID_MASTERS),
    }
}

/// Integer value of `key`, or `default` when absent or empty.
pub fn resolve_int<S: ConfigSource + ?Sized>(
    source: &S,
    key: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    match non_empty(source, key) {
        Some(raw) => parse_int(key, &raw),
        None => Ok(default),
    }
}

fn non_empty<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Option<String> {
    source.lookup(key).filter(|v| !v.is_empty())
}

fn parse_int(key: &'static str, raw: &str) -> Result<i64, ConfigError> {
    raw.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
        key,
        reason: format!("{raw:?}: {e}"),
    })
}

fn default_avoid_networks() -> BTreeSet<String> {
    BTreeSet::from([DEFAULT_AVOID_NETWORK.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use composer_model::Env;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn avoid_networks_defaults_to_ingress() {
        assert_eq!(resolve_avoid_networks(None).unwrap(), set(&["ingress"]));
        assert_eq!(resolve_avoid_networks(Some("")).unwrap(), set(&["ingress"]));
    }

    #[test]
    fn avoid_networks_splits_on_comma() {
        assert_eq!(
            resolve_avoid_networks(Some("a,b,c")).unwrap(),
            set(&["a", "b", "c"])
        );
    }

    #[test]
    fn avoid_networks_keeps_entries_literal() {
        let nets = resolve_avoid_networks(Some("a, b,a")).unwrap();
        assert_eq!(nets, set(&["a", " b"]));
        assert!(!nets.contains("ingress"));
    }

    #[test]
    fn avoid_masters_parsing() {
        assert_eq!(resolve_avoid_masters(None).unwrap(), 1);
        assert_eq!(resolve_avoid_masters(Some("")).unwrap(), 1);
        assert_eq!(resolve_avoid_masters(Some("0")).unwrap(), 0);
        assert_eq!(resolve_avoid_masters(Some("1")).unwrap(), 1);
        assert_eq!(resolve_avoid_masters(Some("7")).unwrap(), 7);
    }

    #[test]
    fn avoid_masters_rejects_garbage() {
        let err = resolve_avoid_masters(Some("bad")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: KEY_AVOID_MASTERS,
                ..
            }
        ));
        assert!(err.to_string().contains("AVOID_MASTERS"));
    }

    #[test]
    fn resolve_uses_defaults_for_empty_source() {
        let cfg = ResolvedConfig::resolve(&Env::new()).unwrap();
        assert_eq!(cfg, ResolvedConfig::default());
        assert!(!cfg.masters_eligible());
        assert!(!cfg.dry_run);
    }

    #[test]
    fn resolve_reads_recognised_keys() {
        let src = [
            ("AVOID_NETWORKS", "ingress,monitoring"),
            ("AVOID_MASTERS", "0"),
            ("DRY_RUN", "1"),
            ("CYCLE_TIME_SECONDS", "30"),
            ("PORT", "9000"),
        ];
        let cfg = ResolvedConfig::resolve(&src).unwrap();

        assert_eq!(cfg.avoid_networks, set(&["ingress", "monitoring"]));
        assert!(cfg.masters_eligible());
        assert!(cfg.dry_run);
        assert_eq!(cfg.client.cycle_time_secs, 30);
        assert_eq!(cfg.client.port, "9000");
        assert_eq!(cfg.client.startup_retries, 1);
    }

    #[test]
    fn flag_only_entries_fall_back_to_defaults() {
        let src = [("AVOID_NETWORKS", ""), ("AVOID_MASTERS", ""), ("PORT", "")];
        let cfg = ResolvedConfig::resolve(&src).unwrap();
        assert_eq!(cfg, ResolvedConfig::default());
    }

    #[test]
    fn malformed_client_setting_fails() {
        let src = [("STARTUP_RETRIES", "three")];
        let err = ResolvedConfig::resolve(&src).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: KEY_STARTUP_RETRIES,
                ..
            }
        ));
    }
}
