use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::ProfileRecord;
use crate::config::StoragePaths;
use crate::config::paths::screen_name_from_file;
use crate::error::{AppError, AppResult};

/// Result of enumerating the account directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileListing {
    Available(Vec<String>),
    /// The directory could not be created or read.
    Unavailable(String),
}

impl ProfileListing {
    /// Profile names; an unreadable directory counts as having none.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Available(names) => names,
            Self::Unavailable(_) => &[],
        }
    }

    pub fn into_names(self) -> Vec<String> {
        match self {
            Self::Available(names) => names,
            Self::Unavailable(_) => Vec::new(),
        }
    }

    pub fn contains(&self, screen_name: &str) -> bool {
        self.names().iter().any(|name| name == screen_name)
    }
}

pub trait ProfileStore {
    fn list(&self) -> ProfileListing;
    fn load(&self, screen_name: &str) -> AppResult<Option<ProfileRecord>>;
    /// Persists a new record. Never overwrites an existing profile.
    fn create(&self, record: &ProfileRecord) -> AppResult<PathBuf>;

    fn exists(&self, screen_name: &str) -> bool {
        self.list().contains(screen_name)
    }
}

#[derive(Debug, Clone)]
pub struct FileProfileStore {
    paths: StoragePaths,
}

impl FileProfileStore {
    pub fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    fn read_names(&self) -> AppResult<Vec<String>> {
        self.paths.ensure_accounts_dir()?;

        let mut names = Vec::new();
        for entry in fs::read_dir(self.paths.accounts_dir())? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(screen_name) = file_name.to_str().and_then(screen_name_from_file) else {
                continue;
            };

            if !entry.path().is_file() {
                continue;
            }

            names.push(screen_name.to_string());
        }

        Ok(names)
    }
}

impl ProfileStore for FileProfileStore {
    fn list(&self) -> ProfileListing {
        match self.read_names() {
            Ok(names) => {
                debug!(count = names.len(), "listed profiles");
                ProfileListing::Available(names)
            }
            Err(err) => {
                warn!(
                    dir = %self.paths.accounts_dir().display(),
                    error = %err,
                    "profile directory unavailable; treating as empty"
                );
                ProfileListing::Unavailable(err.to_string())
            }
        }
    }

    fn load(&self, screen_name: &str) -> AppResult<Option<ProfileRecord>> {
        let path = self.paths.record_file(screen_name);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        let record = serde_json::from_str(&raw)?;
        Ok(Some(record))
    }

    fn create(&self, record: &ProfileRecord) -> AppResult<PathBuf> {
        let screen_name = &record.screen_name;
        if self.exists(screen_name) {
            return Err(AppError::ProfileExists(screen_name.clone()));
        }

        self.paths.ensure_accounts_dir()?;
        let path = self.paths.record_file(screen_name);
        let payload = serde_json::to_string_pretty(record)?;

        // create_new closes the gap between the listing above and this write.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(AppError::ProfileExists(screen_name.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(payload.as_bytes())?;
        file.flush()?;

        info!(screen_name = %screen_name, path = %path.display(), "created profile");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> FileProfileStore {
        let paths = StoragePaths::new(dir.path().join("person/accounts")).expect("paths");
        FileProfileStore::new(paths)
    }

    #[test]
    fn listing_bootstraps_missing_directory() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        assert_eq!(store.list(), ProfileListing::Available(Vec::new()));
        assert!(store.paths().accounts_dir().is_dir());
    }

    #[test]
    fn unreadable_directory_lists_as_unavailable() {
        let dir = TempDir::new().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker");
        let store =
            FileProfileStore::new(StoragePaths::new(blocker.join("accounts")).expect("paths"));

        let listing = store.list();
        assert!(matches!(listing, ProfileListing::Unavailable(_)));
        assert!(listing.names().is_empty());
    }

    #[test]
    fn directories_with_record_extension_are_not_profiles() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        fs::create_dir_all(store.paths().accounts_dir().join("nested.json")).expect("mkdir");

        assert!(store.list().names().is_empty());
    }

    #[test]
    fn create_refuses_existing_name() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        store
            .create(&ProfileRecord::new("Foo"))
            .expect("first create");

        let err = store
            .create(&ProfileRecord::new("Foo"))
            .expect_err("second create should fail");
        assert!(matches!(err, AppError::ProfileExists(name) if name == "Foo"));
    }

    #[test]
    fn load_missing_profile_is_none() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);
        assert!(store.load("Nobody").expect("load").is_none());
    }
}
