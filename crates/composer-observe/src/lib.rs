//! Logging setup for the composer binaries.
mod config;
pub use config::{KEY_LOG_COLOR, KEY_LOG_FORMAT, KEY_LOG_LEVEL, KEY_LOG_TZ, LoggerConfig};

mod error;
pub use error::{LoggerError, LoggerResult};

mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod timer;
pub use timer::{LoggerTimeZone, Rfc3339Timer, init_local_offset, local_offset};

mod install;

/// Install the global tracing subscriber described by `cfg`.
///
/// Call [`init_local_offset`] first when `cfg.tz` is [`LoggerTimeZone::Local`].
///
/// ```rust
/// use composer_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::logger_text(cfg),
        LoggerFormat::Json => install::logger_json(cfg),
        LoggerFormat::Journald => install::logger_journald(cfg),
    }
}
