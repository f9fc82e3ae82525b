//! Host file-explorer integration.
//!
//! The launcher program is fixed per target at build time.

use std::path::Path;
use std::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("no file explorer integration on this platform")]
    Unsupported,
}

/// Asks the host environment to show a folder.
pub trait FolderOpener {
    fn open_path_in_file_explorer(&self, path: &Path) -> Result<(), OpenError>;
}

#[cfg(windows)]
const LAUNCHER: Option<&str> = Some("explorer");

#[cfg(target_os = "macos")]
const LAUNCHER: Option<&str> = Some("open");

#[cfg(all(unix, not(target_os = "macos")))]
const LAUNCHER: Option<&str> = Some("xdg-open");

#[cfg(not(any(windows, unix)))]
const LAUNCHER: Option<&str> = None;

/// Opener backed by the platform's launcher program.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl FolderOpener for SystemOpener {
    fn open_path_in_file_explorer(&self, path: &Path) -> Result<(), OpenError> {
        let program = LAUNCHER.ok_or(OpenError::Unsupported)?;
        // Not waited on: explorer.exe reports failure codes even on success.
        Command::new(program)
            .arg(path)
            .spawn()
            .map(drop)
            .map_err(|source| OpenError::Launch { program, source })
    }
}
