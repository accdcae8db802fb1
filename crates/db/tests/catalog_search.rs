//! Integration tests for the catalog search repository.
//!
//! Exercises every criteria variant against a real database:
//! - substring keyword matching and release-year ordering
//! - pagination bounds (offset before cap, rows <= page_size)
//! - genre and genre+year-range filtering
//! - actor joins
//! - year-range fallback behaviour and directory listings

use sqlx::PgPool;

use filmseek_core::search::SearchCriteria;
use filmseek_db::models::film::YearRange;
use filmseek_db::repositories::FilmRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_film(pool: &PgPool, title: &str, year: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO film (title, description, release_year, length, rating) \
         VALUES ($1, 'a test film', $2, 90, 'PG') RETURNING film_id",
    )
    .bind(title)
    .bind(year)
    .fetch_one(pool)
    .await
    .expect("insert film")
}

async fn seed_category(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO category (name) VALUES ($1) RETURNING category_id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("insert category")
}

async fn seed_actor(pool: &PgPool, first_name: &str, last_name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO actor (first_name, last_name) VALUES ($1, $2) RETURNING actor_id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .expect("insert actor")
}

async fn link_category(pool: &PgPool, film_id: i64, category_id: i64) {
    sqlx::query("INSERT INTO film_category (film_id, category_id) VALUES ($1, $2)")
        .bind(film_id)
        .bind(category_id)
        .execute(pool)
        .await
        .expect("link film to category");
}

async fn link_actor(pool: &PgPool, actor_id: i64, film_id: i64) {
    sqlx::query("INSERT INTO film_actor (actor_id, film_id) VALUES ($1, $2)")
        .bind(actor_id)
        .bind(film_id)
        .execute(pool)
        .await
        .expect("link actor to film");
}

// ---------------------------------------------------------------------------
// Keyword search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn keyword_matches_substring_case_insensitively(pool: PgPool) {
    seed_film(&pool, "ACADEMY DINOSAUR", 2006).await;
    seed_film(&pool, "ACE GOLDFINGER", 2005).await;

    let page = FilmRepo::search_by_keyword(&pool, "dino", None, None)
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].title, "ACADEMY DINOSAUR");
}

#[sqlx::test(migrations = "./migrations")]
async fn keyword_orders_by_release_year_descending(pool: PgPool) {
    seed_film(&pool, "ALPHA TRIP", 2001).await;
    seed_film(&pool, "BETA TRIP", 2006).await;
    seed_film(&pool, "GAMMA TRIP", 2003).await;

    let page = FilmRepo::search_by_keyword(&pool, "TRIP", None, None)
        .await
        .unwrap();

    let years: Vec<i32> = page.rows.iter().map(|f| f.release_year).collect();
    assert_eq!(years, vec![2006, 2003, 2001]);
}

#[sqlx::test(migrations = "./migrations")]
async fn keyword_no_match_is_empty_not_error(pool: PgPool) {
    seed_film(&pool, "ACADEMY DINOSAUR", 2006).await;

    let page = FilmRepo::search_by_keyword(&pool, "zebra", None, None)
        .await
        .unwrap();

    assert_eq!(page.total_count, 0);
    assert!(page.rows.is_empty());
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn page_rows_never_exceed_page_size(pool: PgPool) {
    for year in 2000..2005 {
        seed_film(&pool, &format!("SERIES {year}"), year).await;
    }

    let page = FilmRepo::search_by_keyword(&pool, "SERIES", Some(1), Some(2))
        .await
        .unwrap();

    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.total_count, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn offset_applies_before_the_size_cap(pool: PgPool) {
    for year in 2000..2005 {
        seed_film(&pool, &format!("SERIES {year}"), year).await;
    }

    // Ordering is year-desc, so page 2 of size 2 holds 2002 and 2001.
    let page = FilmRepo::search_by_keyword(&pool, "SERIES", Some(2), Some(2))
        .await
        .unwrap();

    let years: Vec<i32> = page.rows.iter().map(|f| f.release_year).collect();
    assert_eq!(years, vec![2002, 2001]);

    // The final page holds the single remaining row.
    let last = FilmRepo::search_by_keyword(&pool, "SERIES", Some(3), Some(2))
        .await
        .unwrap();
    assert_eq!(last.rows.len(), 1);
    assert_eq!(last.total_count, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn total_count_is_independent_of_the_requested_page(pool: PgPool) {
    for year in 2000..2004 {
        seed_film(&pool, &format!("SERIES {year}"), year).await;
    }

    let beyond = FilmRepo::search_by_keyword(&pool, "SERIES", Some(9), Some(10))
        .await
        .unwrap();

    assert!(beyond.rows.is_empty());
    assert_eq!(beyond.total_count, 4);
}

// ---------------------------------------------------------------------------
// Genre search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn genre_returns_only_linked_films(pool: PgPool) {
    let action = seed_category(&pool, "Action").await;
    let comedy = seed_category(&pool, "Comedy").await;

    let in_action = seed_film(&pool, "ACTION ONE", 2004).await;
    let in_comedy = seed_film(&pool, "COMEDY ONE", 2005).await;
    link_category(&pool, in_action, action).await;
    link_category(&pool, in_comedy, comedy).await;

    let page = FilmRepo::search_by_genre(&pool, "Action", None, None)
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.rows[0].title, "ACTION ONE");
}

#[sqlx::test(migrations = "./migrations")]
async fn genre_match_is_exact_not_substring(pool: PgPool) {
    let action = seed_category(&pool, "Action").await;
    let film = seed_film(&pool, "ACTION ONE", 2004).await;
    link_category(&pool, film, action).await;

    let page = FilmRepo::search_by_genre(&pool, "Act", None, None)
        .await
        .unwrap();

    assert_eq!(page.total_count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn film_in_several_genres_appears_once_per_genre_search(pool: PgPool) {
    let action = seed_category(&pool, "Action").await;
    let drama = seed_category(&pool, "Drama").await;
    let film = seed_film(&pool, "CROSSOVER", 2002).await;
    link_category(&pool, film, action).await;
    link_category(&pool, film, drama).await;

    let page = FilmRepo::search_by_genre(&pool, "Action", None, None)
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.rows.len(), 1);
}

// ---------------------------------------------------------------------------
// Genre + year range search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn genre_year_range_bounds_are_inclusive(pool: PgPool) {
    let action = seed_category(&pool, "Action").await;
    for year in [1999, 2000, 2006, 2007] {
        let film = seed_film(&pool, &format!("ACTION {year}"), year).await;
        link_category(&pool, film, action).await;
    }

    let page =
        FilmRepo::search_by_genre_and_year(&pool, "Action", 2000, 2006, None, None)
            .await
            .unwrap();

    assert_eq!(page.total_count, 2);
    let years: Vec<i32> = page.rows.iter().map(|f| f.release_year).collect();
    assert_eq!(years, vec![2006, 2000]);
}

#[sqlx::test(migrations = "./migrations")]
async fn genre_year_range_dispatches_through_search(pool: PgPool) {
    let action = seed_category(&pool, "Action").await;
    let film = seed_film(&pool, "ACTION HIT", 2003).await;
    link_category(&pool, film, action).await;

    let criteria = SearchCriteria::GenreYearRange {
        genre: "Action".into(),
        year_from: 2000,
        year_to: 2005,
    };
    let page = FilmRepo::search(&pool, &criteria, Some(1), Some(10))
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.rows[0].title, "ACTION HIT");
}

// ---------------------------------------------------------------------------
// Actor search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn actor_search_returns_that_actors_films(pool: PgPool) {
    let actor = seed_actor(&pool, "PENELOPE", "GUINESS").await;
    let other = seed_actor(&pool, "NICK", "WAHLBERG").await;

    let starred = seed_film(&pool, "STARRED FILM", 2006).await;
    let unrelated = seed_film(&pool, "OTHER FILM", 2004).await;
    link_actor(&pool, actor, starred).await;
    link_actor(&pool, other, unrelated).await;

    let page = FilmRepo::search_by_actor(&pool, actor, None, None)
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.rows[0].title, "STARRED FILM");
}

// ---------------------------------------------------------------------------
// Year ranges
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn empty_catalog_year_range_uses_fixed_fallback(pool: PgPool) {
    let range = FilmRepo::year_range(&pool).await.unwrap();
    assert_eq!(range, YearRange { min_year: 2000, max_year: 2010 });
}

#[sqlx::test(migrations = "./migrations")]
async fn year_range_reflects_catalog_bounds(pool: PgPool) {
    seed_film(&pool, "OLDEST", 1998).await;
    seed_film(&pool, "NEWEST", 2007).await;

    let range = FilmRepo::year_range(&pool).await.unwrap();
    assert_eq!(range, YearRange { min_year: 1998, max_year: 2007 });
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_genre_year_range_uses_fixed_fallback(pool: PgPool) {
    seed_film(&pool, "UNCATEGORIZED", 1995).await;

    let range = FilmRepo::year_range_for_genre(&pool, "Nonexistent")
        .await
        .unwrap();

    assert_eq!(range, YearRange::FALLBACK);
}

#[sqlx::test(migrations = "./migrations")]
async fn genre_year_range_scopes_to_that_genre(pool: PgPool) {
    let action = seed_category(&pool, "Action").await;
    let film = seed_film(&pool, "ACTION MID", 2003).await;
    link_category(&pool, film, action).await;
    seed_film(&pool, "ELSEWHERE", 1990).await;

    let range = FilmRepo::year_range_for_genre(&pool, "Action").await.unwrap();
    assert_eq!(range, YearRange { min_year: 2003, max_year: 2003 });
}

// ---------------------------------------------------------------------------
// Directory listings and single lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn genres_list_is_ordered_by_name(pool: PgPool) {
    seed_category(&pool, "Drama").await;
    seed_category(&pool, "Action").await;
    seed_category(&pool, "Comedy").await;

    let genres = FilmRepo::all_genres(&pool).await.unwrap();

    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Action", "Comedy", "Drama"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn actors_list_is_ordered_by_name(pool: PgPool) {
    seed_actor(&pool, "ZERO", "COOL").await;
    seed_actor(&pool, "ADAM", "GRANT").await;

    let actors = FilmRepo::all_actors(&pool).await.unwrap();

    assert_eq!(actors[0].full_name(), "ADAM GRANT");
    assert_eq!(actors[1].full_name(), "ZERO COOL");
}

#[sqlx::test(migrations = "./migrations")]
async fn enrichment_reads_return_names_for_one_film(pool: PgPool) {
    let film = seed_film(&pool, "ENRICHED", 2001).await;
    let actor = seed_actor(&pool, "PENELOPE", "GUINESS").await;
    let category = seed_category(&pool, "Documentary").await;
    link_actor(&pool, actor, film).await;
    link_category(&pool, film, category).await;

    let actors = FilmRepo::film_actors(&pool, film).await.unwrap();
    let categories = FilmRepo::film_categories(&pool, film).await.unwrap();

    assert_eq!(actors, vec!["PENELOPE GUINESS"]);
    assert_eq!(categories, vec!["Documentary"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn single_lookups_distinguish_present_from_absent(pool: PgPool) {
    let film = seed_film(&pool, "FINDABLE", 2000).await;

    assert!(FilmRepo::find_by_id(&pool, film).await.unwrap().is_some());
    assert!(FilmRepo::find_by_id(&pool, film + 1000).await.unwrap().is_none());
    assert!(FilmRepo::actor_by_id(&pool, 9999).await.unwrap().is_none());
}
