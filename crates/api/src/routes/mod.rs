pub mod catalog;
pub mod health;
pub mod search;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /search/keyword               keyword search (GET)
/// /search/genre                 genre search (GET)
/// /search/genre-year            genre + year-range search (GET)
/// /search/actor                 actor search (GET)
///
/// /films/{id}                   single enriched film (GET)
/// /genres                       category directory (GET)
/// /actors                       actor directory, capped (GET)
/// /year-range                   catalog year bounds (GET)
/// /year-range-for-genre         per-genre year bounds (GET)
///
/// /stats/popular                top distinct searches (GET)
/// /stats/recent                 latest distinct searches (GET)
/// /stats/by-type                event count per search type (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog search.
        .nest("/search", search::router())
        // Directory listings and film detail.
        .merge(catalog::router())
        // Search-usage statistics.
        .nest("/stats", stats::router())
}
