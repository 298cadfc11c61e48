// Runtime configuration resolved from environment variables.
// Every setting has a default so the tool works with no setup: the catalog
// and the log file land in the current directory.

use std::path::PathBuf;

pub const CATALOG_ENV: &str = "LIBRARY_CATALOG";
pub const LOG_DIR_ENV: &str = "LIBRARY_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "LIBRARY_LOG_LEVEL";

const DEFAULT_CATALOG_FILE: &str = "catalog.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Where the catalog and the diagnostic log live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Build the configuration from `LIBRARY_CATALOG`, `LIBRARY_LOG_DIR`
    /// and `LIBRARY_LOG_LEVEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`. Empty
    /// values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let catalog_path = get(CATALOG_ENV)
            .map(|value| expand_home(&value))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE));
        let log_dir = get(LOG_DIR_ENV)
            .map(|value| expand_home(&value))
            .unwrap_or_else(|| PathBuf::from("."));
        let log_level = get(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Config {
            catalog_path,
            log_dir,
            log_level,
        }
    }
}

/// Expand a leading `~/` to the user's home directory. Paths without the
/// prefix, or systems without a home directory, are returned unchanged.
fn expand_home(value: &str) -> PathBuf {
    match (value.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(value),
    }
}
