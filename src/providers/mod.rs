/// Content data provider abstraction
///
/// The engine never talks to TMDB directly; it consumes this trait so tests
/// can substitute canned catalogues. Providers own their failure handling:
/// trending fetches resolve to real data or a static fallback set, never to a
/// transport error.
use crate::models::{CandidateItem, MediaType};

pub mod fallback;
pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Detail record for a title found by name, carrying resolved genre names
/// rather than provider ids
#[derive(Debug, Clone, PartialEq)]
pub struct TitleDetails {
    pub title: String,
    pub genres: Vec<String>,
}

/// Trait for trending-content providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch this week's trending items for one media type.
    ///
    /// Infallible by contract: timeouts, HTTP errors and decode failures all
    /// resolve to the static fallback catalogue.
    async fn fetch_trending(&self, media_type: MediaType) -> Vec<CandidateItem>;

    /// Best-effort title lookup, used to turn a favorite movie into genre
    /// signal. Any failure is `None`.
    async fn search_by_title(&self, title: &str) -> Option<TitleDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
