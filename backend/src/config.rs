use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "data.csv";
pub const DEFAULT_BACKUP_FILE: &str = "backup_data.csv";

/// Locations of the record file and its mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_file: PathBuf,
    pub backup_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE, DEFAULT_BACKUP_FILE)
    }
}

impl StoreConfig {
    pub fn new(data_file: impl Into<PathBuf>, backup_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            backup_file: backup_file.into(),
        }
    }

    /// Default file names placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_DATA_FILE), dir.join(DEFAULT_BACKUP_FILE))
    }
}
