//! Film catalog entity models.

use filmseek_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `film` table. Read-only from this service's
/// perspective; the catalog is owned elsewhere.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub length: Option<i32>,
    pub rating: Option<String>,
    pub language_id: DbId,
}

/// One page of search results plus the independently-counted total.
///
/// `total_count` comes from a separate aggregate query sharing the page
/// query's predicate; the two are not read in one transaction, so they
/// may disagree under concurrent catalog writes. Accepted contract.
#[derive(Debug, Clone)]
pub struct FilmPage {
    pub rows: Vec<Film>,
    pub total_count: i64,
}

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub category_id: DbId,
    pub name: String,
}

/// A row from the `actor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
}

impl Actor {
    /// Display name as shown in enriched results and event params.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Inclusive release-year bounds for a set of films.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearRange {
    /// UI default returned when no films match the queried scope.
    /// A deliberate placeholder for the year-range slider, not an error.
    pub const FALLBACK: YearRange = YearRange {
        min_year: 2000,
        max_year: 2010,
    };
}
