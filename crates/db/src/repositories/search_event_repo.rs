//! Repository for the append-only `search_events` table.

use sqlx::PgPool;

use filmseek_core::types::DbId;

use crate::models::search_event::SearchEvent;

/// Column list for `search_events` queries.
const SEARCH_EVENT_COLUMNS: &str =
    "id, search_type, params, result_count, latency_ms, created_at";

/// Provides append and full-scan reads for search events.
///
/// There is deliberately no update or delete: events are immutable once
/// written, and the analytics pipelines re-rank the full set per call.
pub struct SearchEventRepo;

impl SearchEventRepo {
    /// Append one event row, returning the generated id. The row's
    /// timestamp is assigned by the database at insert time.
    pub async fn insert(
        pool: &PgPool,
        search_type: &str,
        params: &serde_json::Value,
        result_count: i32,
        latency_ms: f64,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO search_events (search_type, params, result_count, latency_ms) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(search_type)
        .bind(params)
        .bind(result_count)
        .bind(latency_ms)
        .fetch_one(pool)
        .await
    }

    /// Read every event, oldest first.
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<SearchEvent>, sqlx::Error> {
        let sql = format!(
            "SELECT {SEARCH_EVENT_COLUMNS} FROM search_events ORDER BY created_at, id"
        );
        sqlx::query_as::<_, SearchEvent>(&sql).fetch_all(pool).await
    }

    /// Total number of stored events.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM search_events")
            .fetch_one(pool)
            .await
    }
}
