//! Durable storage slot: a single JSON file holding the whole episode
//! snapshot. Every save overwrites the previous snapshot in full.

use crate::errors::{AppError, AppResult};
use crate::models::episode::Episode;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageSlot {
    path: PathBuf,
}

impl StorageSlot {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. `Ok(None)` means the slot does not exist yet;
    /// `Err` means it exists but cannot be read or parsed. The caller
    /// decides how to absorb the corrupt case.
    pub fn read(&self) -> AppResult<Option<Vec<Episode>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let episodes = serde_json::from_str(&raw).map_err(|e| {
            AppError::Storage(format!("corrupt snapshot at {}: {}", self.path.display(), e))
        })?;

        Ok(Some(episodes))
    }

    /// Overwrite the slot with the full episode set.
    pub fn write(&self, episodes: &[Episode]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(episodes)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}
