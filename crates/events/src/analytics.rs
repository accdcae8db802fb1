//! Ranking views over the recorded search events.

use std::collections::HashMap;

use filmseek_core::stats::{self, EventInput, PopularEntry, RecentEntry};
use filmseek_db::repositories::SearchEventRepo;
use filmseek_db::DbPool;

/// Read-side analytics over the search-event store.
///
/// Every operation re-reads the full event set and ranks it in memory;
/// no incremental index is maintained. That keeps writers completely
/// unconstrained and makes each view trivially consistent with the
/// events that existed when it was computed.
#[derive(Clone)]
pub struct SearchAnalytics {
    pool: DbPool,
}

impl SearchAnalytics {
    /// Create an analytics reader over an injected store handle.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Top `limit` distinct searches by event count, ties broken by
    /// most-recent occurrence.
    pub async fn popular(&self, limit: usize) -> Result<Vec<PopularEntry>, sqlx::Error> {
        let events = self.load_events().await?;
        Ok(stats::rank_popular(&events, limit))
    }

    /// The `limit` most recent distinct searches.
    pub async fn recent(&self, limit: usize) -> Result<Vec<RecentEntry>, sqlx::Error> {
        let events = self.load_events().await?;
        Ok(stats::collapse_recent(&events, limit))
    }

    /// Event count per search type.
    pub async fn counts_by_type(&self) -> Result<HashMap<String, i64>, sqlx::Error> {
        let events = self.load_events().await?;
        Ok(stats::count_by_type(&events))
    }

    async fn load_events(&self) -> Result<Vec<EventInput>, sqlx::Error> {
        let rows = SearchEventRepo::fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|row| EventInput {
                search_type: row.search_type,
                params: row.params,
                result_count: row.result_count,
                latency_ms: row.latency_ms,
                timestamp: row.created_at,
            })
            .collect())
    }
}
