use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
