//! User-visible messages produced by the session operations.

use crate::error::AppError;
use crate::opener::OpenError;
use kyc_store::{ErrorKind, StoreError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Operation a failure came from; picks the wording of unexpected errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Load,
    OpenFolder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Converts a failed operation into the message shown to the operator.
    ///
    /// Validation problems are warnings, a missing path is informational,
    /// everything else is an error carrying the underlying cause.
    pub fn for_failure(action: Action, err: &AppError) -> Self {
        if let AppError::Store(StoreError::Validation(invalid)) = err {
            return Notice::warning("Validation", validation_message(invalid));
        }
        if let AppError::UnsupportedPath { path } = err {
            return Notice::info(
                "No file",
                format!("The selected path cannot be used:\n{}", path.display()),
            );
        }
        if let AppError::OpenFolder {
            folder,
            source: OpenError::Unsupported,
        } = err
        {
            return Notice::info("Folder Path", folder.display().to_string());
        }

        match err.kind() {
            ErrorKind::Path => Notice::info(
                "No file",
                "Please select or enter a CSV file path first.",
            ),
            ErrorKind::Validation => Notice::warning("Validation", err.to_string()),
            ErrorKind::Io => match (action, err) {
                (Action::Save, AppError::Store(store)) if store.is_permission_denied() => {
                    let path = store
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    Notice::error(
                        "Permission Error",
                        format!("Insufficient permissions to write to:\n{path}"),
                    )
                }
                (Action::Save, _) => {
                    Notice::error("Error", format!("An unexpected error occurred:\n{err}"))
                }
                (Action::Load, _) => {
                    Notice::error("Error", format!("Could not load records:\n{err}"))
                }
                (Action::OpenFolder, _) => {
                    Notice::error("Error", format!("Could not open folder:\n{err}"))
                }
            },
        }
    }
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::Required { field: "customer_id" } => {
            "Customer ID cannot be empty.".to_string()
        }
        ValidationError::Required { field: "location" } => "Location cannot be empty.".to_string(),
        ValidationError::NotNumeric {
            field: "data_throughput",
            ..
        } => "Data Throughput must be a number (e.g., 100 or 50.5).".to_string(),
        ValidationError::NotNumeric {
            field: "latency", ..
        } => "Latency must be a number (e.g., 10 or 12.3).".to_string(),
        other => other.to_string(),
    }
}
