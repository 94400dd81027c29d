use std::io;

/// Failure of the persistence slot behind an [`ItineraryStore`].
///
/// Read failures surface once, at load time, and the store falls back to an
/// empty collection. Write failures ride along with the mutation result so
/// the caller can log them; the in-memory collection is updated either way.
///
/// [`ItineraryStore`]: crate::store::ItineraryStore
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read slot '{key}': {source}")]
    PersistenceRead {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write slot '{key}': {source}")]
    PersistenceWrite {
        key: String,
        #[source]
        source: io::Error,
    },
}
