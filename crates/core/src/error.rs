use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Store and provider failures are recoverable per-call conditions: the
/// API layer decides how each one surfaces (a search-level failure note,
/// an empty collection, a 404). Nothing here is ever process-fatal.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A backing store could not be reached (connection or timeout).
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store rejected a query (malformed statement, constraint, etc.).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The external poster provider failed for one lookup. Always
    /// absorbed inside the resolution cascade, never shown to callers.
    #[error("Poster provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// A search-event write was rejected. Non-fatal by contract.
    #[error("Event logging failed: {0}")]
    LoggingFailed(String),

    /// A single-entity lookup found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },
}
