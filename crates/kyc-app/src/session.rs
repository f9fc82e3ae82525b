//! View-model shared between the window's event handlers and the store.

use crate::error::AppError;
use crate::form::FormState;
use crate::notice::{Action, Notice};
use crate::opener::FolderOpener;
use crate::record_service;
use kyc_store::Record;
use std::path::Path;
use tracing::info;

/// Current store path, the form being edited, and the last loaded rows.
///
/// `rows` is only a projection of the file and is rebuilt on every refresh.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub csv_path: String,
    pub form: FormState,
    rows: Vec<Record>,
}

impl Session {
    pub fn new(csv_path: impl Into<String>) -> Self {
        Self {
            csv_path: csv_path.into(),
            form: FormState::cleared(),
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Switch to a path picked in the file dialog and show its records.
    /// Paths that are not valid UTF-8 are refused and the current path kept.
    pub fn select_path(&mut self, path: &Path) -> Option<Notice> {
        let Some(text) = path.to_str() else {
            let err = AppError::UnsupportedPath {
                path: path.to_path_buf(),
            };
            return Some(Notice::for_failure(Action::Load, &err));
        };
        self.csv_path = text.to_string();
        self.refresh()
    }

    /// Save the form. On success the form is cleared and the table reloaded;
    /// on failure the form is left as typed.
    pub fn save(&mut self) -> Notice {
        match record_service::save_record(&self.csv_path, &self.form) {
            Ok(record) => {
                info!(customer_id = %record.customer_id, "record saved");
                self.form = FormState::cleared();
                self.refresh().unwrap_or_else(|| {
                    Notice::info(
                        "Saved",
                        format!(
                            "KYC data for customer {} added successfully!",
                            record.customer_id
                        ),
                    )
                })
            }
            Err(err) => Notice::for_failure(Action::Save, &err),
        }
    }

    pub fn clear_fields(&mut self) {
        self.form = FormState::cleared();
    }

    /// Reload the table from the store. Prior rows are dropped first, so a
    /// failed read leaves the table empty.
    pub fn refresh(&mut self) -> Option<Notice> {
        self.rows.clear();
        match record_service::load_records(&self.csv_path) {
            Ok(rows) => {
                self.rows = rows;
                None
            }
            Err(err) => Some(Notice::for_failure(Action::Load, &err)),
        }
    }

    /// Show the store's folder in the host file explorer.
    pub fn open_folder(&self, opener: &dyn FolderOpener) -> Option<Notice> {
        record_service::open_folder(&self.csv_path, opener)
            .err()
            .map(|err| Notice::for_failure(Action::OpenFolder, &err))
    }
}
