use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value passed for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("invalid value passed for {key}: no entries")]
    EmptyList { key: &'static str },
}
