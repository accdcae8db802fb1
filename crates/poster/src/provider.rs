//! External poster provider client.
//!
//! [`PosterProvider`] is the seam the resolution cascade queries through;
//! production uses [`TmdbClient`] over HTTP, tests substitute a recording
//! mock. A provider returns `Ok(None)` for "nothing found" and an error
//! only for transport/status failures -- the cascade treats both as a
//! failed tier and moves on.

use std::time::Duration;

use async_trait::async_trait;
use filmseek_core::error::CoreError;
use serde::Deserialize;

/// HTTP timeout for a single provider lookup. A slow provider must never
/// hold a search response for longer than this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Placeholder credential shipped in sample configs; treated as absent.
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Searches an external movie-metadata service for a poster image URL.
#[async_trait]
pub trait PosterProvider: Send + Sync {
    /// Look up a poster by title and optional release year.
    ///
    /// Returns the full image URL of the best match, `Ok(None)` when the
    /// provider has no match, or `CoreError::ProviderUnavailable` on
    /// transport or status failure.
    async fn search_poster(
        &self,
        title: &str,
        year: Option<i32>,
    ) -> Result<Option<String>, CoreError>;
}

// ---------------------------------------------------------------------------
// TMDB configuration
// ---------------------------------------------------------------------------

/// TMDB connection settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API credential. Empty or the sample placeholder means "no
    /// credential": the resolver then skips the provider entirely.
    pub api_key: String,
    /// API base URL (default: `https://api.themoviedb.org/3`).
    pub base_url: String,
    /// Image CDN prefix joined with returned poster paths.
    pub image_base_url: String,
    /// Result language passed to the search endpoint.
    pub language: String,
}

impl TmdbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                            |
    /// |-----------------------|------------------------------------|
    /// | `TMDB_API_KEY`        | (empty)                            |
    /// | `TMDB_BASE_URL`       | `https://api.themoviedb.org/3`     |
    /// | `TMDB_IMAGE_BASE_URL` | `https://image.tmdb.org/t/p/w500`  |
    /// | `TMDB_LANGUAGE`       | `en-US`                            |
    pub fn from_env() -> Self {
        let api_key = std::env::var("TMDB_API_KEY").unwrap_or_default();
        let base_url = std::env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3".into());
        let image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
            .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".into());
        let language = std::env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "en-US".into());

        Self {
            api_key,
            base_url,
            image_base_url,
            language,
        }
    }

    /// Whether a usable credential is configured.
    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }
}

// ---------------------------------------------------------------------------
// TMDB client
// ---------------------------------------------------------------------------

/// `/search/movie` response body (only the fields we read).
#[derive(Debug, Deserialize)]
struct SearchMovieResponse {
    #[serde(default)]
    results: Vec<MovieHit>,
}

#[derive(Debug, Deserialize)]
struct MovieHit {
    poster_path: Option<String>,
}

/// HTTP client for the TMDB `/search/movie` endpoint.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a client with a pre-configured HTTP timeout.
    pub fn new(config: TmdbConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { config, client }
    }
}

#[async_trait]
impl PosterProvider for TmdbClient {
    async fn search_poster(
        &self,
        title: &str,
        year: Option<i32>,
    ) -> Result<Option<String>, CoreError> {
        let url = format!("{}/search/movie", self.config.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("api_key", self.config.api_key.clone()),
            ("query", title.to_string()),
            ("language", self.config.language.clone()),
        ];
        if let Some(year) = year {
            query.push(("year", year.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| CoreError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CoreError::ProviderUnavailable(format!(
                "provider returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let body: SearchMovieResponse = response
            .json()
            .await
            .map_err(|e| CoreError::ProviderUnavailable(e.to_string()))?;

        let poster = body
            .results
            .first()
            .and_then(|hit| hit.poster_path.as_deref())
            .map(|path| format!("{}{}", self.config.image_base_url, path));

        Ok(poster)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
