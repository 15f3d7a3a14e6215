use serde::{Deserialize, Serialize};

use super::Genre;

/// Media type for trending fetches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Path segment used by the content provider API
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A movie or TV show candidate as returned by the content provider.
///
/// TMDB uses `title`/`release_date` for movies and `name`/`first_air_date`
/// for TV shows; the serde aliases fold both shapes into one record. The
/// pipeline only ever reads candidates, it never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateItem {
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default, alias = "first_air_date")]
    pub release_date: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl CandidateItem {
    /// Four-digit release year, or "N/A" when the date string is empty
    pub fn year(&self) -> String {
        match self.release_date.get(..4) {
            Some(year) => year.to_string(),
            None => "N/A".to_string(),
        }
    }

    /// True when any of the item's provider genre ids maps to `genre`
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genre_ids
            .iter()
            .any(|&id| Genre::from_provider_id(id) == Some(genre))
    }
}

/// A candidate paired with its preference score.
///
/// Scores are rewritten by the diversity re-ranker; the candidate payload
/// itself stays untouched. Ordering comparisons happen only on the score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    pub score: f64,
    pub item: CandidateItem,
}
