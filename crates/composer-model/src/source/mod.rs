//! Loader for the base environment file.
//!
//! Format: one `KEY=VALUE` per line. Lines are trimmed; blank lines and lines
//! starting with `#` are skipped; a line without `=` is a key with an empty
//! value; the value is everything after the first `=`. A repeated key keeps
//! its first position and takes the later value.
use std::path::Path;

use crate::{Env, KeyValue, ModelError, ModelResult};

/// Default file name of the base environment.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parse base-environment text into an [`Env`].
pub fn parse_env(content: &str) -> Env {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(KeyValue::parse)
        .collect()
}

/// Read and parse a base-environment file.
pub fn load_env_file(path: impl AsRef<Path>) -> ModelResult<Env> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ModelError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_env(&content))
}
