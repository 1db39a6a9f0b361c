use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log format: {0} (expected: text|json|journald)")]
    InvalidFormat(String),

    #[error("journald is not supported on this platform")]
    JournaldNotSupported,

    #[error("failed to initialize journald: {0}")]
    JournaldInitFailed(String),

    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("invalid timezone: {0} (expected: utc|local)")]
    InvalidTimeZone(String),

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("invalid value for {key}: {value}")]
    InvalidSwitch { key: &'static str, value: String },
}

pub type LoggerResult<T> = Result<T, LoggerError>;
