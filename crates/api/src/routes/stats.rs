//! Route definitions for search-usage statistics.
//!
//! Mounted at `/stats` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Stats routes mounted at `/stats`.
///
/// ```text
/// GET /popular  -> popular_searches
/// GET /recent   -> recent_searches
/// GET /by-type  -> counts_by_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/popular", get(stats::popular_searches))
        .route("/recent", get(stats::recent_searches))
        .route("/by-type", get(stats::counts_by_type))
}
