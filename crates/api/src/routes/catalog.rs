//! Route definitions for catalog directories and film detail.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Directory and detail routes, merged at the API root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films/{id}", get(catalog::film_detail))
        .route("/genres", get(catalog::list_genres))
        .route("/actors", get(catalog::list_actors))
        .route("/year-range", get(catalog::year_range))
        .route("/year-range-for-genre", get(catalog::year_range_for_genre))
}
