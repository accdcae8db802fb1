//! Handlers for the four catalog search endpoints.
//!
//! Each endpoint runs its criteria variant, enriches the returned page,
//! and spawns a search-event write off the response path. Store failures
//! surface as a 200 response with an error note rather than an HTTP
//! error, so clients can distinguish "failed" from "matched nothing".

use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use filmseek_core::search::{clamp_page, clamp_page_size, SearchCriteria};
use filmseek_core::types::DbId;
use filmseek_db::repositories::FilmRepo;

use crate::error::{AppError, AppResult};
use crate::response::{SearchFailure, SearchReply, SearchSuccess};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    pub q: String,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GenreParams {
    pub genre: String,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GenreYearParams {
    pub genre: String,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ActorParams {
    pub actor_id: DbId,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Year-range defaults when the client sends only a genre.
const DEFAULT_YEAR_FROM: i32 = 2000;
const DEFAULT_YEAR_TO: i32 = 2023;

// ---------------------------------------------------------------------------
// Shared search execution helper
// ---------------------------------------------------------------------------

/// Run one search: repository query, page enrichment, fire-and-forget
/// event logging, response assembly.
///
/// `log_params` is the event's raw parameter payload (the identity
/// fields for this search type). The logging write is spawned so the
/// response never waits on, nor fails because of, the event store.
async fn run_search(
    state: &AppState,
    criteria: SearchCriteria,
    log_params: serde_json::Value,
    page: Option<i64>,
    page_size: Option<i64>,
) -> Json<SearchReply> {
    let start = Instant::now();

    let page_num = clamp_page(page);
    let size = clamp_page_size(page_size.or(Some(state.config.page_size)));

    let film_page = match FilmRepo::search(&state.pool, &criteria, Some(page_num), Some(size)).await
    {
        Ok(film_page) => film_page,
        Err(e) => {
            let classified = crate::error::classify_sqlx_error(&e);
            tracing::error!(
                error = %classified,
                search_type = criteria.search_type(),
                "Search query failed"
            );
            let message = match classified {
                filmseek_core::error::CoreError::StoreUnavailable(_) => {
                    "The catalog store is unavailable"
                }
                _ => "The search could not be completed",
            };
            return Json(SearchReply::Failure(SearchFailure {
                error: "Search failed".to_string(),
                message: message.to_string(),
            }));
        }
    };

    let films = state.enricher.enrich_page(&film_page.rows).await;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    let logger = state.logger.clone();
    let search_type = criteria.search_type();
    let result_count = films.len() as i32;
    tokio::spawn(async move {
        logger
            .record(search_type, log_params, result_count, latency_ms)
            .await;
    });

    tracing::debug!(
        search_type,
        results = result_count,
        total = film_page.total_count,
        latency_ms,
        "Search executed",
    );

    Json(SearchReply::Success(SearchSuccess {
        total_count: film_page.total_count,
        page: page_num,
        page_size: size,
        films,
    }))
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/search/keyword
///
/// Case-insensitive substring search on film titles.
pub async fn search_by_keyword(
    State(state): State<AppState>,
    Query(params): Query<KeywordParams>,
) -> AppResult<Json<SearchReply>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("q must not be empty".into()));
    }

    let criteria = SearchCriteria::Keyword {
        query: query.to_string(),
    };
    let log_params = json!({ "keyword": query });

    Ok(run_search(&state, criteria, log_params, params.page, params.page_size).await)
}

/// GET /api/v1/search/genre
///
/// Exact category-name match.
pub async fn search_by_genre(
    State(state): State<AppState>,
    Query(params): Query<GenreParams>,
) -> AppResult<Json<SearchReply>> {
    if params.genre.trim().is_empty() {
        return Err(AppError::BadRequest("genre must not be empty".into()));
    }

    let criteria = SearchCriteria::Genre {
        genre: params.genre.clone(),
    };
    let log_params = json!({ "genre": params.genre });

    Ok(run_search(&state, criteria, log_params, params.page, params.page_size).await)
}

/// GET /api/v1/search/genre-year
///
/// Category match intersected with an inclusive release-year range.
pub async fn search_by_genre_and_year(
    State(state): State<AppState>,
    Query(params): Query<GenreYearParams>,
) -> AppResult<Json<SearchReply>> {
    if params.genre.trim().is_empty() {
        return Err(AppError::BadRequest("genre must not be empty".into()));
    }

    let year_from = params.year_from.unwrap_or(DEFAULT_YEAR_FROM);
    let year_to = params.year_to.unwrap_or(DEFAULT_YEAR_TO);
    if year_from > year_to {
        return Err(AppError::BadRequest(
            "year_from must not exceed year_to".into(),
        ));
    }

    let criteria = SearchCriteria::GenreYearRange {
        genre: params.genre.clone(),
        year_from,
        year_to,
    };
    let log_params = json!({
        "genre": params.genre,
        "years_range": format!("{year_from}-{year_to}"),
    });

    Ok(run_search(&state, criteria, log_params, params.page, params.page_size).await)
}

/// GET /api/v1/search/actor
///
/// Films featuring one actor. The event is logged under the actor's
/// display name; when the actor row is missing the stringified id is
/// used instead, matching the analytics normalization fallback.
pub async fn search_by_actor(
    State(state): State<AppState>,
    Query(params): Query<ActorParams>,
) -> AppResult<Json<SearchReply>> {
    if params.actor_id < 1 {
        return Err(AppError::BadRequest("actor_id must be positive".into()));
    }

    let actor_name = match FilmRepo::actor_by_id(&state.pool, params.actor_id).await {
        Ok(Some(actor)) => actor.full_name(),
        Ok(None) => format!("ID: {}", params.actor_id),
        Err(e) => {
            tracing::warn!(actor_id = params.actor_id, error = %e, "Actor name lookup failed");
            format!("ID: {}", params.actor_id)
        }
    };

    let criteria = SearchCriteria::Actor {
        actor_id: params.actor_id,
    };
    let log_params = json!({ "actor_name": actor_name });

    Ok(run_search(&state, criteria, log_params, params.page, params.page_size).await)
}
