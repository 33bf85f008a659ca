use std::fs;
use std::path::{Path, PathBuf};

use super::RECORD_EXTENSION;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct StoragePaths {
    accounts_dir: PathBuf,
}

impl StoragePaths {
    pub fn new(accounts_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let accounts_dir = accounts_dir.into();
        if accounts_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "profile directory must not be empty".to_string(),
            ));
        }

        Ok(Self { accounts_dir })
    }

    /// Creates the account directory and any missing parents. Succeeds if it already exists.
    pub fn ensure_accounts_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.accounts_dir)?;
        Ok(())
    }

    pub fn record_file(&self, screen_name: &str) -> PathBuf {
        self.accounts_dir
            .join(format!("{screen_name}.{RECORD_EXTENSION}"))
    }

    pub fn accounts_dir(&self) -> &Path {
        &self.accounts_dir
    }
}

/// Returns the profile name for a directory entry, or `None` if it is not a record file.
pub fn screen_name_from_file(file_name: &str) -> Option<&str> {
    let stem = file_name
        .strip_suffix(RECORD_EXTENSION)?
        .strip_suffix('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(stem)
}
