/// TMDB content provider
///
/// Fetches weekly trending movies/TV and performs title search with genre
/// resolution. Every outbound call carries a short timeout and every failure
/// path degrades: trending falls back to the static catalogues, search to
/// `None`. The ranking pipeline never sees a transport error.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::{CandidateItem, MediaType},
    providers::{fallback, ContentProvider, TitleDetails},
};

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    #[serde(default)]
    results: Vec<CandidateItem>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct MovieDetails {
    title: String,
    #[serde(default)]
    genres: Vec<GenreEntry>,
}

#[derive(Debug, Deserialize)]
struct GenreEntry {
    name: String,
}

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl TmdbProvider {
    pub fn new(api_key: Option<String>, api_url: String, timeout: Duration) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            timeout,
        }
    }

    fn fallback_for(media_type: MediaType) -> Vec<CandidateItem> {
        match media_type {
            MediaType::Movie => fallback::fallback_movies(),
            MediaType::Tv => fallback::fallback_tv(),
        }
    }

    async fn fetch_trending_inner(
        &self,
        media_type: MediaType,
        api_key: &str,
    ) -> AppResult<Vec<CandidateItem>> {
        let url = format!("{}/trending/{}/week", self.api_url, media_type);

        let response = self
            .http_client
            .get(&url)
            .timeout(self.timeout)
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {} for trending {}",
                response.status(),
                media_type
            )));
        }

        let trending: TrendingResponse = response.json().await?;
        Ok(trending.results)
    }

    async fn search_inner(&self, title: &str, api_key: &str) -> AppResult<TitleDetails> {
        let search_url = format!("{}/search/movie", self.api_url);
        let response = self
            .http_client
            .get(&search_url)
            .timeout(self.timeout)
            .query(&[("api_key", api_key), ("query", title)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {} for search",
                response.status()
            )));
        }

        let search: SearchResponse = response.json().await?;
        let first = search.results.first().ok_or_else(|| {
            AppError::ExternalApi(format!("No results for title '{}'", title))
        })?;

        // Trending/search payloads only carry genre ids; the detail endpoint
        // resolves them to names.
        let detail_url = format!("{}/movie/{}", self.api_url, first.id);
        let response = self
            .http_client
            .get(&detail_url)
            .timeout(self.timeout)
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {} for movie details",
                response.status()
            )));
        }

        let details: MovieDetails = response.json().await?;
        Ok(TitleDetails {
            title: details.title,
            genres: details.genres.into_iter().map(|g| g.name).collect(),
        })
    }
}

#[async_trait::async_trait]
impl ContentProvider for TmdbProvider {
    async fn fetch_trending(&self, media_type: MediaType) -> Vec<CandidateItem> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!(media_type = %media_type, "TMDB API key missing, serving fallback data");
            return Self::fallback_for(media_type);
        };

        match self.fetch_trending_inner(media_type, api_key).await {
            Ok(items) if !items.is_empty() => {
                tracing::info!(
                    media_type = %media_type,
                    results = items.len(),
                    provider = "tmdb",
                    "Trending fetch completed"
                );
                items
            }
            Ok(_) => {
                tracing::warn!(media_type = %media_type, "TMDB returned no results, serving fallback data");
                Self::fallback_for(media_type)
            }
            Err(e) => {
                tracing::error!(media_type = %media_type, error = %e, "Trending fetch failed, serving fallback data");
                Self::fallback_for(media_type)
            }
        }
    }

    async fn search_by_title(&self, title: &str) -> Option<TitleDetails> {
        let api_key = self.api_key.as_deref()?;
        if title.trim().is_empty() {
            return None;
        }

        match self.search_inner(title, api_key).await {
            Ok(details) => {
                tracing::info!(
                    query = %title,
                    matched = %details.title,
                    genres = details.genres.len(),
                    provider = "tmdb",
                    "Title search completed"
                );
                Some(details)
            }
            Err(e) => {
                tracing::warn!(query = %title, error = %e, "Title search failed");
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
