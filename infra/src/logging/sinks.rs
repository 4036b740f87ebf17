//! Append-only per-level log files

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use super::LoggingError;

pub const INFO_LOG: &str = "info.log";
pub const WARN_LOG: &str = "warn.log";
pub const ERROR_LOG: &str = "error.log";

/// Open handles to the three level files
#[derive(Debug)]
pub struct LogFiles {
    pub info: File,
    pub warn: File,
    pub error: File,
}

impl LogFiles {
    /// Create `directory` if needed and open each level file for appending
    pub fn open(directory: &Path) -> Result<Self, LoggingError> {
        fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDirectory {
            path: directory.to_path_buf(),
            source,
        })?;

        Ok(Self {
            info: open_append(directory.join(INFO_LOG))?,
            warn: open_append(directory.join(WARN_LOG))?,
            error: open_append(directory.join(ERROR_LOG))?,
        })
    }
}

fn open_append(path: PathBuf) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::OpenFile { path, source })
}
