use std::{collections::HashMap, sync::Mutex};

use crate::error::StoreError;

use super::StorageSlot;

/// In-memory slot for tests and ephemeral sessions. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().expect("memory slot mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("memory slot mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("memory slot mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}
