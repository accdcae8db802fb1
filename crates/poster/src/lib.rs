//! Poster resolution for catalog films.
//!
//! Catalog titles are fictional, so a direct metadata lookup usually
//! finds nothing. [`PosterResolver`] runs a deterministic multi-tier
//! fallback cascade against an external provider and caches whatever
//! each `(title, year)` pair resolves to for the life of the process.

pub mod provider;
pub mod resolver;
mod titles;

pub use provider::{PosterProvider, TmdbClient, TmdbConfig};
pub use resolver::{PosterRef, PosterResolver};
