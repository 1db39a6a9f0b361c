use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{LoggerError, LoggerFormat, LoggerLevel, LoggerResult, LoggerTimeZone};

pub const KEY_LOG_LEVEL: &str = "COMPOSER_LOG_LEVEL";
pub const KEY_LOG_FORMAT: &str = "COMPOSER_LOG_FORMAT";
pub const KEY_LOG_TZ: &str = "COMPOSER_LOG_TZ";
pub const KEY_LOG_COLOR: &str = "COMPOSER_LOG_COLOR";

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` expression.
    pub level: LoggerLevel,
    pub tz: LoggerTimeZone,
    /// Include the module target in each record.
    pub with_targets: bool,
    /// Colored text output; ignored when stdout is not a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by the `COMPOSER_LOG_*` variables `lookup` returns.
    ///
    /// Empty values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(level) = get(KEY_LOG_LEVEL) {
            cfg.level = level.parse()?;
        }
        if let Some(format) = get(KEY_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(tz) = get(KEY_LOG_TZ) {
            cfg.tz = tz.parse()?;
        }
        if let Some(color) = get(KEY_LOG_COLOR) {
            cfg.use_color = parse_switch(KEY_LOG_COLOR, &color)?;
        }
        Ok(cfg)
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

fn parse_switch(key: &'static str, value: &str) -> LoggerResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::InvalidSwitch {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.tz, LoggerTimeZone::Utc);
        assert_eq!(cfg.level.as_str(), "info");
        assert!(cfg.with_targets);
        assert!(cfg.use_color);
    }

    #[test]
    fn no_variables_means_defaults() {
        let cfg = LoggerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, LoggerConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = LoggerConfig::from_lookup(lookup(&[
            ("COMPOSER_LOG_LEVEL", "composer_core=debug,warn"),
            ("COMPOSER_LOG_FORMAT", "json"),
            ("COMPOSER_LOG_TZ", "local"),
            ("COMPOSER_LOG_COLOR", "off"),
        ]))
        .unwrap();

        assert_eq!(cfg.level.as_str(), "composer_core=debug,warn");
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.tz, LoggerTimeZone::Local);
        assert!(!cfg.use_color);
    }

    #[test]
    fn empty_variables_are_ignored() {
        let cfg = LoggerConfig::from_lookup(lookup(&[("COMPOSER_LOG_FORMAT", "  ")])).unwrap();
        assert_eq!(cfg.format, LoggerFormat::Text);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(
            LoggerConfig::from_lookup(lookup(&[("COMPOSER_LOG_FORMAT", "xml")])),
            Err(LoggerError::InvalidFormat(_))
        ));
        assert!(matches!(
            LoggerConfig::from_lookup(lookup(&[("COMPOSER_LOG_COLOR", "maybe")])),
            Err(LoggerError::InvalidSwitch { .. })
        ));
    }

    #[test]
    fn partial_deserialization_keeps_defaults() {
        let cfg: LoggerConfig =
            serde_json::from_str(r#"{"format": "json", "level": "debug"}"#).unwrap();
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.level.as_str(), "debug");
        assert!(cfg.with_targets);
    }
}
