//! Shared response envelope types for API handlers.
//!
//! Typed structs instead of ad-hoc `serde_json::json!` blocks, so the
//! wire shapes are checked at compile time and stay consistent across
//! handlers.

use std::collections::HashMap;

use filmseek_core::stats::{PopularEntry, RecentEntry};
use filmseek_db::models::film::Actor;
use serde::Serialize;

use crate::enricher::EnrichedFilm;

/// Successful search page.
#[derive(Debug, Serialize)]
pub struct SearchSuccess {
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub films: Vec<EnrichedFilm>,
}

/// Search-level failure note.
///
/// Returned with HTTP 200 so clients can tell "the search failed" apart
/// from "the search matched nothing" by inspecting the body.
#[derive(Debug, Serialize)]
pub struct SearchFailure {
    pub error: String,
    pub message: String,
}

/// Either outcome of a search request, serialized flat.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchReply {
    Success(SearchSuccess),
    Failure(SearchFailure),
}

/// Actor directory entry with the precomputed display name.
#[derive(Debug, Serialize)]
pub struct ActorEntry {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl From<Actor> for ActorEntry {
    fn from(actor: Actor) -> Self {
        let full_name = actor.full_name();
        Self {
            actor_id: actor.actor_id,
            first_name: actor.first_name,
            last_name: actor.last_name,
            full_name,
        }
    }
}

/// `{ "popular_searches": [...] }` wrapper.
#[derive(Debug, Serialize)]
pub struct PopularSearches {
    pub popular_searches: Vec<PopularEntry>,
}

/// `{ "recent_searches": [...] }` wrapper.
#[derive(Debug, Serialize)]
pub struct RecentSearches {
    pub recent_searches: Vec<RecentEntry>,
}

/// `{ "counts_by_type": {...} }` wrapper.
#[derive(Debug, Serialize)]
pub struct CountsByType {
    pub counts_by_type: HashMap<String, i64>,
}
