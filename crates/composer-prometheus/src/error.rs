use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("metrics text is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write metrics file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
