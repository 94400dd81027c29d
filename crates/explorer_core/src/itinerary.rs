use serde::{Deserialize, Serialize};

/// One saved travel note.
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards. `date` is the traveler's free-form planned date, not a
/// parsed timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub country: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
}

/// Input for inserting an itinerary. A caller-supplied `id` is kept verbatim;
/// with `None` the store generates one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDraft {
    pub id: Option<String>,
    pub country: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: String,
}

/// Partial update for an existing itinerary. `None` fields keep their stored
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPatch {
    pub country: Option<String>,
    pub date: Option<String>,
    pub notes: Option<String>,
}
