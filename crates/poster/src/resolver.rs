//! The poster resolution cascade.
//!
//! [`PosterResolver::resolve`] never fails: it walks a fixed sequence of
//! fallback tiers and, at worst, lands on a glyph chosen from a static
//! palette. Every choice along the way is a pure function of the input
//! `(title, year)` pair, so resolving the same film twice -- in one
//! process or across restarts -- yields the same reference.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Serialize, Serializer};

use crate::provider::PosterProvider;
use crate::titles;

// ---------------------------------------------------------------------------
// PosterRef
// ---------------------------------------------------------------------------

/// A resolved poster reference: an external image URL or a glyph marker.
/// Never absent; serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterRef {
    Url(String),
    Glyph(&'static str),
}

impl PosterRef {
    pub fn as_str(&self) -> &str {
        match self {
            PosterRef::Url(url) => url,
            PosterRef::Glyph(glyph) => glyph,
        }
    }
}

impl Serialize for PosterRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Deterministic selection
// ---------------------------------------------------------------------------

/// FNV-1a 64-bit string hash.
///
/// The tiers that "pick" a stand-in title or glyph do so by hashing their
/// input modulo the table length. FNV-1a is used because its output is a
/// pure function of the bytes with fixed constants (offset basis
/// `0xcbf29ce484222325`, prime `0x100000001b3`), so selections survive
/// process restarts and tests can assert exact outcomes. Not
/// cryptographic, and does not need to be.
pub fn stable_hash(input: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Pick one entry from a non-empty table by hashing the seed.
fn pick<'a>(table: &[&'a str], seed: &str) -> &'a str {
    table[(stable_hash(seed) % table.len() as u64) as usize]
}

// ---------------------------------------------------------------------------
// PosterResolver
// ---------------------------------------------------------------------------

type CacheKey = (String, Option<i32>);

/// Resolves film titles to poster references through a cached fallback
/// cascade.
pub struct PosterResolver {
    /// `None` when no provider credential is configured; resolution then
    /// short-circuits to the glyph tier without any network traffic.
    provider: Option<Box<dyn PosterProvider>>,
    /// Process-lifetime cache, keyed by `(title, year)`. Unbounded and
    /// never invalidated: the catalog is small and poster references are
    /// stable, but a larger deployment would want an eviction policy
    /// here. Concurrent misses on one key may duplicate provider calls;
    /// both racers compute the same value, so last-write-wins is safe.
    cache: RwLock<HashMap<CacheKey, PosterRef>>,
}

impl PosterResolver {
    /// Resolver backed by a provider.
    pub fn new(provider: Box<dyn PosterProvider>) -> Self {
        Self {
            provider: Some(provider),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolver with no provider: every lookup lands on the glyph tier.
    pub fn without_provider() -> Self {
        Self {
            provider: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a poster reference for a film. Infallible; see the tier
    /// walk in [`run_cascade`](Self::run_cascade).
    pub async fn resolve(&self, title: &str, year: Option<i32>) -> PosterRef {
        if title.is_empty() {
            return glyph_for(title);
        }

        let Some(provider) = self.provider.as_deref() else {
            return glyph_for(title);
        };

        let key: CacheKey = (title.to_string(), year);
        if let Some(hit) = self.cache.read().unwrap().get(&key) {
            return hit.clone();
        }

        let resolved = self.run_cascade(provider, title, year).await;

        self.cache.write().unwrap().insert(key, resolved.clone());
        resolved
    }

    /// Walk the fallback tiers, stopping at the first that yields a
    /// poster. Provider errors and empty results both fail the tier.
    ///
    /// 1. The title as-is.
    /// 2. The curated real-title equivalent, when one exists.
    /// 3. A popular title picked deterministically for the release year.
    /// 4. A title picked deterministically from the global fallback pool.
    /// 5. A glyph. Cannot fail.
    async fn run_cascade(
        &self,
        provider: &dyn PosterProvider,
        title: &str,
        year: Option<i32>,
    ) -> PosterRef {
        if let Some(url) = self.try_tier(provider, title, year).await {
            return PosterRef::Url(url);
        }

        if let Some(mapped) = titles::map_to_real_title(title) {
            if !mapped.eq_ignore_ascii_case(title) {
                if let Some(url) = self.try_tier(provider, mapped, year).await {
                    return PosterRef::Url(url);
                }
            }
        }

        if let Some(year) = year {
            if let Some(pool) = titles::popular_titles_for_year(year) {
                let stand_in = pick(pool, &year.to_string());
                if let Some(url) = self.try_tier(provider, stand_in, Some(year)).await {
                    return PosterRef::Url(url);
                }
            }
        }

        let stand_in = pick(titles::FALLBACK_TITLES, title);
        if let Some(url) = self.try_tier(provider, stand_in, None).await {
            return PosterRef::Url(url);
        }

        glyph_for(title)
    }

    /// One provider lookup; errors are logged and collapse to `None`.
    async fn try_tier(
        &self,
        provider: &dyn PosterProvider,
        title: &str,
        year: Option<i32>,
    ) -> Option<String> {
        match provider.search_poster(title, year).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(title, error = %e, "Poster provider lookup failed");
                None
            }
        }
    }
}

/// Tier-5 glyph selection. Empty titles get the constant default.
fn glyph_for(title: &str) -> PosterRef {
    if title.is_empty() {
        return PosterRef::Glyph(titles::DEFAULT_GLYPH);
    }
    PosterRef::Glyph(pick(titles::GLYPHS, title))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
