//! Turns bare catalog rows into display records.

use std::sync::Arc;

use filmseek_core::text::{truncate_description, MAX_DESCRIPTION_LENGTH};
use filmseek_db::models::film::Film;
use filmseek_db::repositories::FilmRepo;
use filmseek_db::DbPool;
use filmseek_poster::{PosterRef, PosterResolver};
use serde::Serialize;

/// A film ready for display: catalog fields plus actor names, category
/// names, and a resolved poster reference.
#[derive(Debug, Serialize)]
pub struct EnrichedFilm {
    pub film_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub length: Option<i32>,
    pub rating: Option<String>,
    pub actors: Vec<String>,
    pub categories: Vec<String>,
    pub poster: PosterRef,
}

/// Attaches actors, categories, and a poster to each film of a page.
///
/// Lookups run per film rather than batched across the page: pages are
/// small and bounded, and the per-row shape keeps partial failure local
/// to one film. A failed sub-lookup degrades that film to an empty
/// actor or category list; it never fails the page.
#[derive(Clone)]
pub struct ResultEnricher {
    pool: DbPool,
    resolver: Arc<PosterResolver>,
}

impl ResultEnricher {
    pub fn new(pool: DbPool, resolver: Arc<PosterResolver>) -> Self {
        Self { pool, resolver }
    }

    /// Enrich one film.
    pub async fn enrich(&self, film: &Film) -> EnrichedFilm {
        let actors = match FilmRepo::film_actors(&self.pool, film.film_id).await {
            Ok(actors) => actors,
            Err(e) => {
                tracing::warn!(film_id = film.film_id, error = %e, "Actor lookup failed");
                Vec::new()
            }
        };

        let categories = match FilmRepo::film_categories(&self.pool, film.film_id).await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(film_id = film.film_id, error = %e, "Category lookup failed");
                Vec::new()
            }
        };

        let poster = self
            .resolver
            .resolve(&film.title, Some(film.release_year))
            .await;

        EnrichedFilm {
            film_id: film.film_id,
            title: film.title.clone(),
            description: film
                .description
                .as_deref()
                .map(|d| truncate_description(d, MAX_DESCRIPTION_LENGTH)),
            release_year: film.release_year,
            length: film.length,
            rating: film.rating.clone(),
            actors,
            categories,
            poster,
        }
    }

    /// Enrich a page of films in order.
    pub async fn enrich_page(&self, films: &[Film]) -> Vec<EnrichedFilm> {
        let mut enriched = Vec::with_capacity(films.len());
        for film in films {
            enriched.push(self.enrich(film).await);
        }
        enriched
    }
}
