//! Search criteria and pagination helpers.
//!
//! This module lives in `core` (zero internal deps) so the repository
//! layer, the event logger, and the API server all share one definition
//! of what a search is.

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Search type names
// ---------------------------------------------------------------------------
//
// These strings are stored verbatim in the `search_events.search_type`
// column and drive parameter normalization in [`crate::stats`].

/// Substring match on film title.
pub const SEARCH_TYPE_KEYWORD: &str = "keyword";

/// Exact category-name match.
pub const SEARCH_TYPE_GENRE: &str = "genre";

/// Category match intersected with an inclusive release-year range.
pub const SEARCH_TYPE_GENRE_YEARS: &str = "genre__years_range";

/// Films joined to one actor id.
pub const SEARCH_TYPE_ACTOR: &str = "actor";

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Default number of films per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of films per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Listing cap for the unpaginated actor directory.
pub const ACTOR_LIST_CAP: i64 = 100;

/// Clamp a 1-indexed page number to valid bounds.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

/// Row offset for a 1-indexed page.
///
/// # Examples
///
/// ```
/// use filmseek_core::search::page_offset;
/// assert_eq!(page_offset(1, 10), 0);
/// assert_eq!(page_offset(3, 10), 20);
/// ```
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// One of the four mutually exclusive catalog search modes.
///
/// Pagination travels alongside the criteria rather than inside it, so a
/// criteria value identifies a search independently of which page of it
/// is being viewed. Analytics relies on exactly this split.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCriteria {
    Keyword { query: String },
    Genre { genre: String },
    GenreYearRange { genre: String, year_from: i32, year_to: i32 },
    Actor { actor_id: DbId },
}

impl SearchCriteria {
    /// The stored search-type name for this criteria variant.
    pub fn search_type(&self) -> &'static str {
        match self {
            SearchCriteria::Keyword { .. } => SEARCH_TYPE_KEYWORD,
            SearchCriteria::Genre { .. } => SEARCH_TYPE_GENRE,
            SearchCriteria::GenreYearRange { .. } => SEARCH_TYPE_GENRE_YEARS,
            SearchCriteria::Actor { .. } => SEARCH_TYPE_ACTOR,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
