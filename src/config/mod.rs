pub mod paths;

pub use paths::StoragePaths;

/// Default account directory, relative to the working directory the server runs from.
pub const DEFAULT_ACCOUNTS_DIR: &str = "./data/person/accounts";

/// Environment override for the account directory.
pub const ACCOUNTS_DIR_ENV: &str = "ECHOLAND_ACCOUNTS_DIR";

/// Extension of every profile record file.
pub const RECORD_EXTENSION: &str = "json";
