//! Error types for the kyc-app service layer.

use crate::opener::OpenError;
use kyc_store::{ErrorKind, StoreError};
use std::path::PathBuf;

/// Application error type that wraps store and host-environment failures
/// behind one interface for the frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No file path specified")]
    NoPath,

    #[error("Path is not valid UTF-8: {}", path.display())]
    UnsupportedPath { path: PathBuf },

    #[error("Could not open folder {folder}: {source}")]
    OpenFolder { folder: PathBuf, source: OpenError },

    #[error("Failed to read settings file: {path}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write settings file: {path}")]
    SettingsWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed settings file {path}: {source}")]
    SettingsFormat {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Result type for kyc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Store(err) => err.kind(),
            AppError::NoPath | AppError::UnsupportedPath { .. } => ErrorKind::Path,
            AppError::OpenFolder { .. }
            | AppError::SettingsRead { .. }
            | AppError::SettingsWrite { .. }
            | AppError::SettingsFormat { .. } => ErrorKind::Io,
        }
    }
}
