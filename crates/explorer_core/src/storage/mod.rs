use crate::error::StoreError;

pub mod file_slot;
pub mod memory_slot;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;

/// A named string slot, the persistence seam behind the itinerary store.
///
/// The production app backs this with a file per key under the app data
/// directory; tests swap in [`MemorySlot`] or a failing fake.
pub trait StorageSlot: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Drops `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
