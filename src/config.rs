//! Runtime configuration read from the environment (and `.env`, loaded by the binary).

use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "CHORD_DRILL_DB_PATH";
pub const EXPORT_PATH_VAR: &str = "CHORD_DRILL_EXPORT_PATH";
pub const DEFAULT_DB_PATH: &str = "jazz_chords.db";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Where the binary writes a JSON backup of all records, if set
    pub export_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            db_path: non_empty(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            export_path: non_empty(EXPORT_PATH_VAR).map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
