use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to resolve root directory {path:?}: {message}")]
    RootResolution { path: PathBuf, message: String },

    #[error("Failed to open output file {path:?}: {message}")]
    OutputOpen { path: PathBuf, message: String },

    #[error("Failed to write output file {path:?}: {message}")]
    OutputWrite { path: PathBuf, message: String },

    #[error("Failed to read file {path:?}: {message}")]
    FileRead { path: PathBuf, message: String },

    #[error("Failed to write block for {path:?}: {message}")]
    FileWrite { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for CaptureError {
    fn from(err: serde_json::Error) -> Self {
        CaptureError::ConfigError(err.to_string())
    }
}
