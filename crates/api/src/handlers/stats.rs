//! Handlers for search-usage statistics.
//!
//! Analytics failures degrade to empty result collections; a broken
//! event store must never take the stats pages down with it.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::response::{CountsByType, PopularSearches, RecentSearches};
use crate::state::AppState;

/// Default number of entries for the ranked stats endpoints.
const DEFAULT_STATS_LIMIT: usize = 5;

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub limit: Option<usize>,
}

/// GET /api/v1/stats/popular
///
/// Top distinct searches by event count.
pub async fn popular_searches(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Json<PopularSearches> {
    let limit = params.limit.unwrap_or(DEFAULT_STATS_LIMIT);

    let popular_searches = match state.analytics.popular(limit).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "Popular searches query failed");
            Vec::new()
        }
    };

    Json(PopularSearches { popular_searches })
}

/// GET /api/v1/stats/recent
///
/// Most recent distinct searches.
pub async fn recent_searches(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Json<RecentSearches> {
    let limit = params.limit.unwrap_or(DEFAULT_STATS_LIMIT);

    let recent_searches = match state.analytics.recent(limit).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "Recent searches query failed");
            Vec::new()
        }
    };

    Json(RecentSearches { recent_searches })
}

/// GET /api/v1/stats/by-type
///
/// Event count per search type.
pub async fn counts_by_type(State(state): State<AppState>) -> Json<CountsByType> {
    let counts_by_type = match state.analytics.counts_by_type().await {
        Ok(counts) => counts,
        Err(e) => {
            tracing::error!(error = %e, "Counts-by-type query failed");
            Default::default()
        }
    };

    Json(CountsByType { counts_by_type })
}
