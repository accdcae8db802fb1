//! Search-usage analytics: parameter normalization and ranking.
//!
//! Search events are written with whatever raw parameter shape the
//! originating endpoint used (`{keyword, page}`, `{genre, years_range}`,
//! `{actor_name}`, ...). Before two events can be compared they are
//! reduced to a normalized key: the fields that define search *identity*,
//! with pagination dropped. The ranking pipelines here are pure functions
//! over in-memory event data; the event store is only ever read in full
//! and re-ranked on each call.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::search::{
    SEARCH_TYPE_ACTOR, SEARCH_TYPE_GENRE, SEARCH_TYPE_GENRE_YEARS, SEARCH_TYPE_KEYWORD,
};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// One search event, as read back from the event store.
#[derive(Debug, Clone)]
pub struct EventInput {
    pub search_type: String,
    pub params: Value,
    pub result_count: i32,
    pub latency_ms: f64,
    pub timestamp: Timestamp,
}

/// One entry in the popularity ranking.
#[derive(Debug, Clone, Serialize)]
pub struct PopularEntry {
    pub search_type: String,
    /// Normalized identity key for the group.
    pub params: Value,
    pub count: i64,
    pub last_timestamp: Timestamp,
}

/// One entry in the recency ranking: the newest event per distinct search,
/// with its raw params replaced by the normalized key.
#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
    pub search_type: String,
    pub params: Value,
    pub result_count: i32,
    pub latency_ms: f64,
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Reduce raw search params to the normalized identity key for grouping.
///
/// Per search type, only the identity-defining fields survive:
///
/// | search type          | kept fields                                   |
/// |----------------------|-----------------------------------------------|
/// | `keyword`            | `keyword`                                     |
/// | `genre__years_range` | `genre`, `years_range` (the literal string)   |
/// | `genre`              | `genre`                                       |
/// | `actor`              | `actor_name` (falls back to stringified `actor_id`) |
/// | anything else        | params unchanged                              |
///
/// Pagination fields never survive for recognized types. Idempotent:
/// normalizing an already-normalized key yields the same key.
pub fn normalize_params(search_type: &str, params: &Value) -> Value {
    match search_type {
        SEARCH_TYPE_KEYWORD => keep_fields(params, &["keyword"]),
        SEARCH_TYPE_GENRE_YEARS => keep_fields(params, &["genre", "years_range"]),
        SEARCH_TYPE_GENRE => keep_fields(params, &["genre"]),
        SEARCH_TYPE_ACTOR => normalize_actor(params),
        _ => params.clone(),
    }
}

/// Copy only the named fields into a fresh JSON object.
fn keep_fields(params: &Value, fields: &[&str]) -> Value {
    let mut kept = Map::new();
    for field in fields {
        if let Some(value) = params.get(*field) {
            kept.insert((*field).to_string(), value.clone());
        }
    }
    Value::Object(kept)
}

/// Actor searches are keyed by display name; events recorded before the
/// actor's name could be resolved carry only `actor_id`, which is kept as
/// its stringified form under `actor_name`.
fn normalize_actor(params: &Value) -> Value {
    let mut kept = Map::new();
    if let Some(name) = params.get("actor_name") {
        kept.insert("actor_name".to_string(), name.clone());
    } else if let Some(id) = params.get("actor_id") {
        let as_string = match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        kept.insert("actor_name".to_string(), Value::String(as_string));
    }
    Value::Object(kept)
}

/// Canonical grouping key for one event.
///
/// `serde_json::Map` is ordered by field name, so serializing the
/// normalized object yields the same string for equal key sets.
fn group_key(search_type: &str, normalized: &Value) -> String {
    format!("{search_type}\u{1f}{normalized}")
}

// ---------------------------------------------------------------------------
// Ranking pipelines
// ---------------------------------------------------------------------------

/// Top `limit` distinct searches by event count.
///
/// Events are grouped by `(search_type, normalized key)`; each group
/// counts its members and takes the newest timestamp. Groups sort by
/// count descending, ties broken by that newest timestamp descending.
pub fn rank_popular(events: &[EventInput], limit: usize) -> Vec<PopularEntry> {
    let mut groups: HashMap<String, PopularEntry> = HashMap::new();

    for event in events {
        let normalized = normalize_params(&event.search_type, &event.params);
        let key = group_key(&event.search_type, &normalized);

        groups
            .entry(key)
            .and_modify(|entry| {
                entry.count += 1;
                if event.timestamp > entry.last_timestamp {
                    entry.last_timestamp = event.timestamp;
                }
            })
            .or_insert_with(|| PopularEntry {
                search_type: event.search_type.clone(),
                params: normalized,
                count: 1,
                last_timestamp: event.timestamp,
            });
    }

    let mut ranked: Vec<PopularEntry> = groups.into_values().collect();
    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(b.last_timestamp.cmp(&a.last_timestamp))
    });
    ranked.truncate(limit);
    ranked
}

/// The `limit` most recent distinct searches.
///
/// Events are walked newest-first and collapsed to the first occurrence
/// of each `(search_type, normalized key)`, preserving that event's
/// result count and latency.
pub fn collapse_recent(events: &[EventInput], limit: usize) -> Vec<RecentEntry> {
    let mut ordered: Vec<&EventInput> = events.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut seen: HashSet<String> = HashSet::new();
    let mut collapsed: Vec<RecentEntry> = Vec::new();

    for event in ordered {
        let normalized = normalize_params(&event.search_type, &event.params);
        let key = group_key(&event.search_type, &normalized);
        if !seen.insert(key) {
            continue;
        }
        collapsed.push(RecentEntry {
            search_type: event.search_type.clone(),
            params: normalized,
            result_count: event.result_count,
            latency_ms: event.latency_ms,
            timestamp: event.timestamp,
        });
        if collapsed.len() == limit {
            break;
        }
    }

    collapsed
}

/// Event count per observed search type.
pub fn count_by_type(events: &[EventInput]) -> HashMap<String, i64> {
    let mut counts: HashMap<String, i64> = HashMap::new();
    for event in events {
        *counts.entry(event.search_type.clone()).or_insert(0) += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn ts(secs: i64) -> Timestamp {
        chrono::Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn event(search_type: &str, params: Value, secs: i64) -> EventInput {
        EventInput {
            search_type: search_type.to_string(),
            params,
            result_count: 10,
            latency_ms: 12.5,
            timestamp: ts(secs),
        }
    }

    // -- normalize_params ----------------------------------------------------

    #[test]
    fn keyword_keeps_only_keyword() {
        let normalized =
            normalize_params("keyword", &json!({"keyword": "dino", "page": 3}));
        assert_eq!(normalized, json!({"keyword": "dino"}));
    }

    #[test]
    fn genre_years_keeps_genre_and_literal_range() {
        let normalized = normalize_params(
            "genre__years_range",
            &json!({"genre": "Action", "years_range": "2000-2006", "page": 2}),
        );
        assert_eq!(
            normalized,
            json!({"genre": "Action", "years_range": "2000-2006"})
        );
    }

    #[test]
    fn genre_drops_pagination() {
        let normalized =
            normalize_params("genre", &json!({"genre": "Comedy", "page": 1, "page_size": 10}));
        assert_eq!(normalized, json!({"genre": "Comedy"}));
    }

    #[test]
    fn actor_prefers_name() {
        let normalized =
            normalize_params("actor", &json!({"actor_name": "PENELOPE GUINESS"}));
        assert_eq!(normalized, json!({"actor_name": "PENELOPE GUINESS"}));
    }

    #[test]
    fn actor_falls_back_to_stringified_id() {
        let normalized = normalize_params("actor", &json!({"actor_id": 7}));
        assert_eq!(normalized, json!({"actor_name": "7"}));
    }

    #[test]
    fn unrecognized_type_passes_params_through() {
        let params = json!({"anything": true, "page": 9});
        assert_eq!(normalize_params("mystery", &params), params);
    }

    #[test]
    fn normalization_is_idempotent() {
        for (search_type, params) in [
            ("keyword", json!({"keyword": "dino", "page": 4})),
            ("genre", json!({"genre": "Action", "page": 2})),
            (
                "genre__years_range",
                json!({"genre": "Drama", "years_range": "1998-2004"}),
            ),
            ("actor", json!({"actor_id": 31})),
        ] {
            let once = normalize_params(search_type, &params);
            let twice = normalize_params(search_type, &once);
            assert_eq!(once, twice, "{search_type} normalization not idempotent");
        }
    }

    // -- rank_popular --------------------------------------------------------

    #[test]
    fn popular_groups_across_pages_and_ranks_by_count() {
        let events = vec![
            event("genre", json!({"genre": "Action", "page": 1}), 0),
            event("genre", json!({"genre": "Action", "page": 2}), 10),
            event("genre", json!({"genre": "Comedy"}), 20),
        ];

        let ranked = rank_popular(&events, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].params, json!({"genre": "Action"}));
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[0].last_timestamp, ts(10));
        assert_eq!(ranked[1].params, json!({"genre": "Comedy"}));
        assert_eq!(ranked[1].count, 1);
    }

    #[test]
    fn popular_breaks_count_ties_by_recency() {
        let events = vec![
            event("keyword", json!({"keyword": "old"}), 0),
            event("keyword", json!({"keyword": "new"}), 50),
        ];

        let ranked = rank_popular(&events, 5);

        assert_eq!(ranked[0].params, json!({"keyword": "new"}));
        assert_eq!(ranked[1].params, json!({"keyword": "old"}));
    }

    #[test]
    fn popular_respects_limit() {
        let events: Vec<EventInput> = (0..10)
            .map(|i| event("keyword", json!({"keyword": format!("q{i}")}), i))
            .collect();
        assert_eq!(rank_popular(&events, 3).len(), 3);
    }

    // -- collapse_recent -----------------------------------------------------

    #[test]
    fn recent_has_no_duplicate_keys() {
        let events = vec![
            event("genre", json!({"genre": "Action", "page": 1}), 0),
            event("genre", json!({"genre": "Action", "page": 3}), 30),
            event("keyword", json!({"keyword": "dino"}), 15),
        ];

        let recent = collapse_recent(&events, 10);

        assert_eq!(recent.len(), 2);
        // Newest Action event wins the collapse.
        assert_eq!(recent[0].params, json!({"genre": "Action"}));
        assert_eq!(recent[0].timestamp, ts(30));
        assert_eq!(recent[1].params, json!({"keyword": "dino"}));
    }

    #[test]
    fn recent_is_ordered_newest_first() {
        let events = vec![
            event("keyword", json!({"keyword": "a"}), 5),
            event("keyword", json!({"keyword": "b"}), 25),
            event("keyword", json!({"keyword": "c"}), 15),
        ];

        let recent = collapse_recent(&events, 10);

        let keys: Vec<&Value> = recent.iter().map(|r| &r.params).collect();
        assert_eq!(
            keys,
            vec![
                &json!({"keyword": "b"}),
                &json!({"keyword": "c"}),
                &json!({"keyword": "a"}),
            ]
        );
    }

    #[test]
    fn recent_preserves_collapsed_event_fields() {
        let mut newer = event("genre", json!({"genre": "Action"}), 40);
        newer.result_count = 3;
        newer.latency_ms = 99.0;
        let older = event("genre", json!({"genre": "Action"}), 1);

        let recent = collapse_recent(&[older, newer], 5);

        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].result_count, 3);
        assert_eq!(recent[0].latency_ms, 99.0);
    }

    // -- count_by_type -------------------------------------------------------

    #[test]
    fn counts_sum_to_total_events() {
        let events = vec![
            event("keyword", json!({"keyword": "a"}), 0),
            event("keyword", json!({"keyword": "b"}), 1),
            event("genre", json!({"genre": "Action"}), 2),
            event("actor", json!({"actor_id": 1}), 3),
        ];

        let counts = count_by_type(&events);

        assert_eq!(counts.get("keyword"), Some(&2));
        assert_eq!(counts.get("genre"), Some(&1));
        assert_eq!(counts.get("actor"), Some(&1));
        assert_eq!(counts.values().sum::<i64>(), events.len() as i64);
    }
}
