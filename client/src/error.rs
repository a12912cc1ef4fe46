use std::path::PathBuf;
use thiserror::Error;

/// Failures that end the client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter '{directive}': {reason}")]
    LogFilter { directive: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
