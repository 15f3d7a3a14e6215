use crate::models::{Genre, ScoredItem};

use super::ContextKey;

/// Popularity score separating "popular" from "underrated" content
const POPULARITY_CUTOFF: f64 = 100.0;

/// Minimum number of items the strong-context filter must leave standing
/// before the relaxation fallback kicks in
const MIN_SURVIVORS: usize = 5;

/// Item cap for the relaxed fallback pass
const RELAXED_LIMIT: usize = 15;

/// User-selected popularity preference.
///
/// Parsing is deliberately permissive: anything that is not "popular" or
/// "underrated" (the UI also sends "mix") means no filtering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularityBias {
    Popular,
    Underrated,
    Any,
}

impl PopularityBias {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "popular" => PopularityBias::Popular,
            "underrated" => PopularityBias::Underrated,
            _ => PopularityBias::Any,
        }
    }
}

/// Partitions items by the popularity cutoff according to the bias
pub fn filter_by_popularity(items: Vec<ScoredItem>, bias: PopularityBias) -> Vec<ScoredItem> {
    match bias {
        PopularityBias::Popular => items
            .into_iter()
            .filter(|s| s.item.popularity > POPULARITY_CUTOFF)
            .collect(),
        PopularityBias::Underrated => items
            .into_iter()
            .filter(|s| s.item.popularity < POPULARITY_CUTOFF)
            .collect(),
        PopularityBias::Any => items,
    }
}

/// Genre rules for one strong (mood, context) pair
#[derive(Debug)]
pub struct StrongContextProfile {
    pub preferred: &'static [Genre],
    pub banned: &'static [Genre],
    pub min_score: f64,
}

static ROMANTIC_PARTNER: StrongContextProfile = StrongContextProfile {
    preferred: &[Genre::Romance, Genre::Drama, Genre::Comedy],
    banned: &[Genre::Horror, Genre::Thriller],
    min_score: 0.15,
};

static SCARED_ALONE: StrongContextProfile = StrongContextProfile {
    preferred: &[Genre::Horror, Genre::Thriller, Genre::Mystery],
    banned: &[Genre::Comedy, Genre::Animation, Genre::Romance],
    min_score: 0.05,
};

static EXCITED_FRIENDS: StrongContextProfile = StrongContextProfile {
    preferred: &[Genre::Action, Genre::Comedy, Genre::Adventure, Genre::Thriller],
    banned: &[],
    min_score: 0.20,
};

/// Filter rules for the strong pairs; every other key gets no context filter
pub fn strong_profile(key: &ContextKey) -> Option<&'static StrongContextProfile> {
    match (key.mood(), key.context()) {
        ("romantic", "partner") => Some(&ROMANTIC_PARTNER),
        ("scared", "alone") => Some(&SCARED_ALONE),
        ("excited", "friends") => Some(&EXCITED_FRIENDS),
        _ => None,
    }
}

fn has_any(item: &ScoredItem, genres: &[Genre]) -> bool {
    genres.iter().any(|&g| item.item.has_genre(g))
}

/// Applies the strong-context genre filter.
///
/// Keeps an item when it carries a preferred genre or scores above the
/// profile threshold, and carries no banned genre. When fewer than five items
/// survive, relaxes to a banned-genre-only pass capped at fifteen items; the
/// fallback is a safety net against over-filtering, not a retry of the
/// preferred/threshold logic.
pub fn filter_by_context(
    items: Vec<ScoredItem>,
    profile: &StrongContextProfile,
) -> Vec<ScoredItem> {
    let filtered: Vec<ScoredItem> = items
        .iter()
        .filter(|s| {
            let keep = has_any(s, profile.preferred) || s.score >= profile.min_score;
            keep && !has_any(s, profile.banned)
        })
        .cloned()
        .collect();

    if filtered.len() >= MIN_SURVIVORS {
        return filtered;
    }

    tracing::debug!(
        survivors = filtered.len(),
        "Context filter too aggressive, relaxing to banned-genre pass"
    );
    items
        .into_iter()
        .filter(|s| !has_any(s, profile.banned))
        .take(RELAXED_LIMIT)
        .collect()
}
