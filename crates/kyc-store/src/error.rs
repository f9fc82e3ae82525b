use std::path::PathBuf;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// A record failed a business rule. Nothing was written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} required")]
    Required { field: &'static str },

    #[error("{field} must be numeric")]
    NotNumeric { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field } | ValidationError::NotNumeric { field, .. } => {
                *field
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("No file path specified")]
    Path,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

/// Coarse failure category, used by frontends to pick how a failure is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Path,
    Io,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Validation(_) => ErrorKind::Validation,
            StoreError::Path => ErrorKind::Path,
            StoreError::Io { .. } | StoreError::Csv { .. } => ErrorKind::Io,
        }
    }

    /// Path the failing I/O touched, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StoreError::Io { path, .. } | StoreError::Csv { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        match self {
            StoreError::Io { source, .. } => source.kind() == std::io::ErrorKind::PermissionDenied,
            StoreError::Csv { source, .. } => matches!(
                source.kind(),
                csv::ErrorKind::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied
            ),
            _ => false,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> StoreError {
        let path = path.into();
        move |source| StoreError::Io { path, source }
    }
}
