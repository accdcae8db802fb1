use std::sync::Arc;

use filmseek_events::{SearchAnalytics, SearchLogger};

use crate::config::ServerConfig;
use crate::enricher::ResultEnricher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Everything is constructed once at startup and injected here; there is
/// no ambient global state. Cheaply cloneable (inner data is behind
/// `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog / event store connection pool.
    pub pool: filmseek_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Attaches actors, categories, and posters to search results.
    pub enricher: ResultEnricher,
    /// Fire-and-forget search event writer.
    pub logger: SearchLogger,
    /// Ranking views over recorded search events.
    pub analytics: SearchAnalytics,
}
