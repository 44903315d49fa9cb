//! Disk storage
//!
//! One JSON file per key inside the backup directory; survives restarts

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::utils::env_var_or_else;

use super::Error;
use super::Result;
use super::Storage;

const DEFAULT_BACKUP_DIR: &str = "./backups";

/// A file-per-key storage rooted at a local directory
#[derive(Clone, Debug)]
pub struct Disk {
    /// Directory holding one file per key
    root: PathBuf,
}

impl Disk {
    /// Create a disk storage rooted at `BACKUP_DIR`
    pub fn new() -> Self {
        Self::with_root(PathBuf::from(env_var_or_else("BACKUP_DIR", || {
            String::from(DEFAULT_BACKUP_DIR)
        })))
    }

    /// Create a disk storage rooted at the given directory
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl Storage for Disk {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Error::Read(error.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|error| Error::Write(error.to_string()))?;

        fs::write(self.path_for(key), value)
            .await
            .map_err(|error| Error::Write(error.to_string()))
    }
}
