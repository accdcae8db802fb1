//! Route definitions for catalog search.
//!
//! Mounted at `/search` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Search routes mounted at `/search`.
///
/// ```text
/// GET /keyword      -> search_by_keyword
/// GET /genre        -> search_by_genre
/// GET /genre-year   -> search_by_genre_and_year
/// GET /actor        -> search_by_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/keyword", get(search::search_by_keyword))
        .route("/genre", get(search::search_by_genre))
        .route("/genre-year", get(search::search_by_genre_and_year))
        .route("/actor", get(search::search_by_actor))
}
