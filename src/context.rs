use std::path::PathBuf;

use tracing::debug;

use crate::config::StoragePaths;
use crate::error::AppResult;
use crate::profile::FileProfileStore;

#[derive(Debug)]
pub struct AppContext {
    pub store: FileProfileStore,
}

impl AppContext {
    pub fn bootstrap(accounts_dir: PathBuf) -> AppResult<Self> {
        let paths = StoragePaths::new(accounts_dir)?;
        debug!(dir = %paths.accounts_dir().display(), "using profile storage");
        let store = FileProfileStore::new(paths);

        Ok(Self { store })
    }
}
