use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SliceError>;

/// Failures at the I/O boundary. Graph construction and querying never fail.
#[derive(Error, Debug)]
pub enum SliceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error in {path}: {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Invalid input path: {0}")]
    InvalidPath(String),

    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),
}
