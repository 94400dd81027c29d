use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::{
    error::StoreError,
    itinerary::{Itinerary, ItineraryDraft, ItineraryPatch},
    storage::StorageSlot,
};

/// Slot key the itinerary collection lives under.
pub const ITINERARIES_SLOT_KEY: &str = "world_explorer_itineraries";

/// Ordered itinerary collection with write-through persistence.
///
/// The in-memory list is the source of truth while the app runs. Every
/// mutation applies to memory first and then rewrites the whole slot as one
/// JSON array; a write failure is reported alongside the mutation result but
/// never rolls the memory change back. Records keep insertion order.
pub struct ItineraryStore {
    slot: Arc<dyn StorageSlot>,
    key: String,
    items: Vec<Itinerary>,
}

impl ItineraryStore {
    /// Opens the store on the default slot key.
    pub fn open(slot: Arc<dyn StorageSlot>) -> Self {
        Self::open_at(slot, ITINERARIES_SLOT_KEY)
    }

    /// Opens the store on `key`. Loading is fail-soft: an absent, unreadable,
    /// or malformed slot logs a warning and starts the collection empty.
    pub fn open_at(slot: Arc<dyn StorageSlot>, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = match load(slot.as_ref(), &key) {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load itineraries, starting empty");
                Vec::new()
            }
        };

        Self { slot, key, items }
    }

    /// Inserts a new record, stamping `created_at` and, unless the draft
    /// carries one, a fresh id.
    pub fn add(&mut self, draft: ItineraryDraft) -> (Itinerary, Result<(), StoreError>) {
        let record = Itinerary {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            country: draft.country,
            date: draft.date,
            notes: draft.notes,
            created_at: now_iso(),
        };

        self.items.push(record.clone());
        (record, self.persist())
    }

    /// Applies `patch` to the record with `id` and returns the updated copy.
    /// An unknown id changes nothing, persists nothing, and yields `None`.
    pub fn update(
        &mut self,
        id: &str,
        patch: ItineraryPatch,
    ) -> (Option<Itinerary>, Result<(), StoreError>) {
        let Some(record) = self.items.iter_mut().find(|item| item.id == id) else {
            return (None, Ok(()));
        };

        if let Some(country) = patch.country {
            record.country = country;
        }
        if let Some(date) = patch.date {
            record.date = date;
        }
        if let Some(notes) = patch.notes {
            record.notes = notes;
        }

        let updated = record.clone();
        (Some(updated), self.persist())
    }

    /// Removes the record with `id`, reporting whether anything was removed.
    /// The slot is rewritten either way.
    pub fn delete(&mut self, id: &str) -> (bool, Result<(), StoreError>) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;

        (removed, self.persist())
    }

    pub fn get_all(&self) -> &[Itinerary] {
        &self.items
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Itinerary> {
        self.items.iter().find(|item| item.id == id)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_string(&self.items).map_err(|source| StoreError::PersistenceWrite {
                key: self.key.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
            })?;

        self.slot.set(&self.key, &serialized)
    }
}

fn load(slot: &dyn StorageSlot, key: &str) -> Result<Vec<Itinerary>, StoreError> {
    let Some(raw) = slot.get(key)? else {
        return Ok(Vec::new());
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).map_err(|source| StoreError::PersistenceRead {
        key: key.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
    })
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
