//! Core of the World Explorer desktop app: the normalized country view
//! model, the itinerary store with its injected persistence slot, and the
//! REST Countries lookup client. The Tauri shell in `src-tauri` is a thin
//! command layer over this crate.

pub mod country;
pub mod error;
pub mod itinerary;
pub mod lookup;
pub mod storage;
pub mod store;

pub use country::Country;
pub use error::StoreError;
pub use itinerary::{Itinerary, ItineraryDraft, ItineraryPatch};
pub use lookup::{LookupError, RestCountriesClient, RESTCOUNTRIES_BASE_URL};
pub use storage::{FileSlot, MemorySlot, StorageSlot};
pub use store::{ItineraryStore, ITINERARIES_SLOT_KEY};
