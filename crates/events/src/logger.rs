//! Append-only search event logging.

use filmseek_db::repositories::SearchEventRepo;
use filmseek_db::DbPool;

/// Writes one event per completed search into the event store.
///
/// Logging is strictly best-effort: every failure is caught here,
/// logged, and reported as a `false` return. Callers fire this off the
/// response path (`tokio::spawn`) so a slow or unreachable event store
/// cannot delay or fail a search.
#[derive(Clone)]
pub struct SearchLogger {
    pool: DbPool,
}

impl SearchLogger {
    /// Create a logger over an injected store handle.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Record a completed search. Returns whether the write succeeded.
    pub async fn record(
        &self,
        search_type: &str,
        params: serde_json::Value,
        result_count: i32,
        latency_ms: f64,
    ) -> bool {
        match SearchEventRepo::insert(&self.pool, search_type, &params, result_count, latency_ms)
            .await
        {
            Ok(id) => {
                tracing::debug!(event_id = id, search_type, "Recorded search event");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, search_type, "Failed to record search event");
                false
            }
        }
    }
}
