//! Shared application service layer for the KYC record desk.
//!
//! Frontends hold a [`Session`] and call its operations from their event
//! handlers. Every failure comes back as a [`Notice`] ready to be shown to
//! the operator; nothing here panics or exits.

pub mod error;
pub mod form;
pub mod notice;
pub mod opener;
pub mod record_service;
pub mod session;
pub mod settings;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use form::FormState;
pub use notice::{Action, Notice, NoticeLevel};
pub use opener::{FolderOpener, OpenError, SystemOpener};
pub use record_service::{folder_for, load_records, open_folder, save_record};
pub use session::Session;
pub use settings::{SETTINGS_FILE, Settings};

pub use kyc_store::{Column, ErrorKind, Record};
