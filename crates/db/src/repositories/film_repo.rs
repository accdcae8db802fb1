//! Repository for the film catalog: multi-criteria paginated search plus
//! the auxiliary listings the search UI needs.
//!
//! Every search variant runs two statements built from one shared
//! predicate fragment: an aggregate COUNT for the total, and the page
//! query with `LIMIT/OFFSET`. The pair is intentionally not transactional;
//! under concurrent catalog writes the numbers may briefly disagree.

use sqlx::PgPool;

use filmseek_core::search::{
    clamp_page, clamp_page_size, page_offset, SearchCriteria, ACTOR_LIST_CAP,
};
use filmseek_core::types::DbId;

use crate::models::film::{Actor, Film, FilmPage, Genre, YearRange};

/// Column list for `film` page queries.
const FILM_COLUMNS: &str =
    "f.film_id, f.title, f.description, f.release_year, f.length, f.rating, f.language_id";

/// Shared source+predicate fragments. Each search variant formats its
/// COUNT twin and its page query from the same fragment so the two can
/// never drift apart.
const KEYWORD_MATCH: &str = "FROM film f WHERE f.title ILIKE $1";

const GENRE_MATCH: &str = "FROM film f \
     JOIN film_category fc ON fc.film_id = f.film_id \
     JOIN category c ON c.category_id = fc.category_id \
     WHERE c.name = $1";

const GENRE_YEARS_MATCH: &str = "FROM film f \
     JOIN film_category fc ON fc.film_id = f.film_id \
     JOIN category c ON c.category_id = fc.category_id \
     WHERE c.name = $1 AND f.release_year BETWEEN $2 AND $3";

const ACTOR_MATCH: &str = "FROM film f \
     JOIN film_actor fa ON fa.film_id = f.film_id \
     WHERE fa.actor_id = $1";

/// Ordering applied to every search variant. Ties within a release year
/// have no defined secondary order; callers must not rely on one.
const SEARCH_ORDER: &str = "ORDER BY f.release_year DESC";

/// Provides catalog search and lookup operations.
pub struct FilmRepo;

impl FilmRepo {
    // -----------------------------------------------------------------------
    // Search (one method per criteria variant)
    // -----------------------------------------------------------------------

    /// Dispatch a search to the matching criteria variant.
    pub async fn search(
        pool: &PgPool,
        criteria: &SearchCriteria,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<FilmPage, sqlx::Error> {
        match criteria {
            SearchCriteria::Keyword { query } => {
                Self::search_by_keyword(pool, query, page, page_size).await
            }
            SearchCriteria::Genre { genre } => {
                Self::search_by_genre(pool, genre, page, page_size).await
            }
            SearchCriteria::GenreYearRange {
                genre,
                year_from,
                year_to,
            } => {
                Self::search_by_genre_and_year(pool, genre, *year_from, *year_to, page, page_size)
                    .await
            }
            SearchCriteria::Actor { actor_id } => {
                Self::search_by_actor(pool, *actor_id, page, page_size).await
            }
        }
    }

    /// Case-insensitive substring match on title, newest release first.
    pub async fn search_by_keyword(
        pool: &PgPool,
        query: &str,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<FilmPage, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);
        let pattern = format!("%{query}%");

        let count_sql = format!("SELECT COUNT(*) {KEYWORD_MATCH}");
        let total_count: i64 = sqlx::query_scalar(&count_sql)
            .bind(&pattern)
            .fetch_one(pool)
            .await?;

        let page_sql =
            format!("SELECT {FILM_COLUMNS} {KEYWORD_MATCH} {SEARCH_ORDER} LIMIT $2 OFFSET $3");
        let rows = sqlx::query_as::<_, Film>(&page_sql)
            .bind(&pattern)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(FilmPage { rows, total_count })
    }

    /// Exact category-name match through the film/category join.
    ///
    /// `DISTINCT` both in the count and the page query: a film carries a
    /// category at most once in the result.
    pub async fn search_by_genre(
        pool: &PgPool,
        genre: &str,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<FilmPage, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let count_sql = format!("SELECT COUNT(DISTINCT f.film_id) {GENRE_MATCH}");
        let total_count: i64 = sqlx::query_scalar(&count_sql)
            .bind(genre)
            .fetch_one(pool)
            .await?;

        let page_sql = format!(
            "SELECT DISTINCT {FILM_COLUMNS} {GENRE_MATCH} {SEARCH_ORDER} LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Film>(&page_sql)
            .bind(genre)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(FilmPage { rows, total_count })
    }

    /// Category match intersected with an inclusive release-year range.
    pub async fn search_by_genre_and_year(
        pool: &PgPool,
        genre: &str,
        year_from: i32,
        year_to: i32,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<FilmPage, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let count_sql = format!("SELECT COUNT(DISTINCT f.film_id) {GENRE_YEARS_MATCH}");
        let total_count: i64 = sqlx::query_scalar(&count_sql)
            .bind(genre)
            .bind(year_from)
            .bind(year_to)
            .fetch_one(pool)
            .await?;

        let page_sql = format!(
            "SELECT DISTINCT {FILM_COLUMNS} {GENRE_YEARS_MATCH} {SEARCH_ORDER} LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, Film>(&page_sql)
            .bind(genre)
            .bind(year_from)
            .bind(year_to)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(FilmPage { rows, total_count })
    }

    /// Films joined to one actor id.
    pub async fn search_by_actor(
        pool: &PgPool,
        actor_id: DbId,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<FilmPage, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let count_sql = format!("SELECT COUNT(DISTINCT f.film_id) {ACTOR_MATCH}");
        let total_count: i64 = sqlx::query_scalar(&count_sql)
            .bind(actor_id)
            .fetch_one(pool)
            .await?;

        let page_sql = format!(
            "SELECT DISTINCT {FILM_COLUMNS} {ACTOR_MATCH} {SEARCH_ORDER} LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Film>(&page_sql)
            .bind(actor_id)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await?;

        Ok(FilmPage { rows, total_count })
    }

    // -----------------------------------------------------------------------
    // Year ranges
    // -----------------------------------------------------------------------

    /// Release-year bounds across the whole catalog.
    ///
    /// Returns [`YearRange::FALLBACK`] when the catalog is empty.
    pub async fn year_range(pool: &PgPool) -> Result<YearRange, sqlx::Error> {
        let bounds: (Option<i32>, Option<i32>) = sqlx::query_as(
            "SELECT MIN(release_year), MAX(release_year) FROM film",
        )
        .fetch_one(pool)
        .await?;

        Ok(range_or_fallback(bounds))
    }

    /// Release-year bounds for films carrying the given category.
    ///
    /// Returns [`YearRange::FALLBACK`] when no film matches.
    pub async fn year_range_for_genre(
        pool: &PgPool,
        genre: &str,
    ) -> Result<YearRange, sqlx::Error> {
        let sql = format!("SELECT MIN(f.release_year), MAX(f.release_year) {GENRE_MATCH}");
        let bounds: (Option<i32>, Option<i32>) =
            sqlx::query_as(&sql).bind(genre).fetch_one(pool).await?;

        Ok(range_or_fallback(bounds))
    }

    // -----------------------------------------------------------------------
    // Directory listings
    // -----------------------------------------------------------------------

    /// All categories, ordered by name.
    pub async fn all_genres(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT category_id, name FROM category ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Actor directory, ordered by name and capped.
    pub async fn all_actors(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT actor_id, first_name, last_name FROM actor \
             ORDER BY first_name, last_name LIMIT $1",
        )
        .bind(ACTOR_LIST_CAP)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Single-entity lookups
    // -----------------------------------------------------------------------

    /// Fetch one film row by id.
    pub async fn find_by_id(pool: &PgPool, film_id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let sql = format!("SELECT {FILM_COLUMNS} FROM film f WHERE f.film_id = $1");
        sqlx::query_as::<_, Film>(&sql)
            .bind(film_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one actor row by id.
    pub async fn actor_by_id(pool: &PgPool, actor_id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT actor_id, first_name, last_name FROM actor WHERE actor_id = $1",
        )
        .bind(actor_id)
        .fetch_optional(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Per-film enrichment reads
    // -----------------------------------------------------------------------

    /// Actor display names for one film.
    pub async fn film_actors(pool: &PgPool, film_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT a.first_name || ' ' || a.last_name \
             FROM actor a \
             JOIN film_actor fa ON fa.actor_id = a.actor_id \
             WHERE fa.film_id = $1",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await
    }

    /// Category names for one film.
    pub async fn film_categories(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT c.name \
             FROM category c \
             JOIN film_category fc ON fc.category_id = c.category_id \
             WHERE fc.film_id = $1",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await
    }
}

/// Collapse aggregate MIN/MAX bounds into a range, falling back to the
/// UI default when the queried scope matched nothing.
fn range_or_fallback(bounds: (Option<i32>, Option<i32>)) -> YearRange {
    match bounds {
        (Some(min_year), Some(max_year)) => YearRange { min_year, max_year },
        _ => YearRange::FALLBACK,
    }
}
