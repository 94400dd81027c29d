use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};

use crate::error::StoreError;

use super::StorageSlot;

/// Slot backed by one file per key under a base directory.
///
/// Writes go through a sibling temp file and an atomic rename, so an
/// interrupted write can never leave a half-written slot behind.
#[derive(Debug, Clone)]
pub struct FileSlot {
    base_dir: PathBuf,
}

impl FileSlot {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("failed to create {}", self.base_dir.display()))?;

        let path = self.slot_path(key);
        let tmp_path = path.with_extension("tmp");

        fs::write(&tmp_path, value)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path).with_context(|| {
            format!(
                "failed to atomically move {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl StorageSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::PersistenceRead {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.write_value(key, value)
            .map_err(|source| StoreError::PersistenceWrite {
                key: key.to_string(),
                source: io::Error::other(source),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::PersistenceWrite {
                key: key.to_string(),
                source,
            }),
        }
    }
}
