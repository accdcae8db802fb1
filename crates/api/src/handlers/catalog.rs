//! Handlers for catalog directory listings and single-film lookup.
//!
//! Listing endpoints degrade to empty collections on store failure; the
//! year-range endpoints fall back to their UI defaults. Only the
//! single-film lookup reports errors through the HTTP error envelope.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use filmseek_core::error::CoreError;
use filmseek_core::types::DbId;
use filmseek_db::models::film::{Genre, YearRange};
use filmseek_db::repositories::FilmRepo;

use crate::enricher::EnrichedFilm;
use crate::error::{AppError, AppResult};
use crate::response::ActorEntry;
use crate::state::AppState;

/// Year range served when even the aggregate query fails. Wider than the
/// repository's empty-match fallback so the UI slider stays usable.
const ERROR_YEAR_RANGE: YearRange = YearRange {
    min_year: 1990,
    max_year: 2025,
};

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub genre: String,
}

/// GET /api/v1/genres
///
/// All categories ordered by name. Degrades to an empty list.
pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<Genre>> {
    match FilmRepo::all_genres(&state.pool).await {
        Ok(genres) => Json(genres),
        Err(e) => {
            tracing::error!(error = %e, "Genre listing failed");
            Json(Vec::new())
        }
    }
}

/// GET /api/v1/actors
///
/// The capped actor directory ordered by name. Degrades to an empty list.
pub async fn list_actors(State(state): State<AppState>) -> Json<Vec<ActorEntry>> {
    match FilmRepo::all_actors(&state.pool).await {
        Ok(actors) => Json(actors.into_iter().map(ActorEntry::from).collect()),
        Err(e) => {
            tracing::error!(error = %e, "Actor listing failed");
            Json(Vec::new())
        }
    }
}

/// GET /api/v1/year-range
///
/// Release-year bounds across the catalog.
pub async fn year_range(State(state): State<AppState>) -> Json<YearRange> {
    match FilmRepo::year_range(&state.pool).await {
        Ok(range) => Json(range),
        Err(e) => {
            tracing::error!(error = %e, "Year range query failed");
            Json(ERROR_YEAR_RANGE)
        }
    }
}

/// GET /api/v1/year-range-for-genre
///
/// Release-year bounds for one category.
pub async fn year_range_for_genre(
    State(state): State<AppState>,
    Query(params): Query<GenreQuery>,
) -> Json<YearRange> {
    match FilmRepo::year_range_for_genre(&state.pool, &params.genre).await {
        Ok(range) => Json(range),
        Err(e) => {
            tracing::error!(genre = %params.genre, error = %e, "Genre year range query failed");
            Json(ERROR_YEAR_RANGE)
        }
    }
}

/// GET /api/v1/films/{id}
///
/// One enriched film.
pub async fn film_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EnrichedFilm>> {
    let film = FilmRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;

    let enriched = state.enricher.enrich(&film).await;
    Ok(Json(enriched))
}
