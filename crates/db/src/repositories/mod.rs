//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod film_repo;
pub mod search_event_repo;

pub use film_repo::FilmRepo;
pub use search_event_repo::SearchEventRepo;
