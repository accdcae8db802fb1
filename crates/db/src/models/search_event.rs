//! Search-event entity model.

use filmseek_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `search_events` table: one completed search.
///
/// Rows are append-only and immutable; analytics re-reads the full set
/// on every ranking call.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchEvent {
    pub id: DbId,
    pub search_type: String,
    pub params: serde_json::Value,
    pub result_count: i32,
    pub latency_ms: f64,
    pub created_at: Timestamp,
}
