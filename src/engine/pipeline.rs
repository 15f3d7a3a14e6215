use std::sync::Arc;

use crate::models::{MediaType, ScoredItem};
use crate::oracle::CorrectionOracle;
use crate::providers::ContentProvider;

use super::{blend, context::ContextKey, diversity, filters, rank, rules, GenreVector};

/// Candidate slice the diversity re-ranker operates on
const DIVERSITY_WINDOW: usize = 30;

/// Number of recommendations returned per media type
const RESULT_COUNT: usize = 5;

/// Raw questionnaire answers driving one recommendation request
#[derive(Debug, Clone, Default)]
pub struct RecommendationInput {
    pub favorite_movie: String,
    pub favorite_genres: Vec<String>,
    pub current_mood: String,
    pub watching_context: String,
    pub popularity_bias: String,
}

/// Ranked output, one list per media type
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub movies: Vec<ScoredItem>,
    pub tv: Vec<ScoredItem>,
}

/// The recommendation pipeline.
///
/// Holds the two injected collaborators: the content provider and the
/// correction oracle. Both are constructed once at startup and used
/// read-only, so one recommender serves concurrent requests without locks.
pub struct Recommender {
    provider: Arc<dyn ContentProvider>,
    oracle: Arc<dyn CorrectionOracle>,
}

impl Recommender {
    pub fn new(provider: Arc<dyn ContentProvider>, oracle: Arc<dyn CorrectionOracle>) -> Self {
        Self { provider, oracle }
    }

    /// Runs the full pipeline: favorite-movie genre extraction, rule vector,
    /// hybrid blend, then per-media-type ranking and filtering.
    pub async fn recommend(&self, input: &RecommendationInput) -> Recommendations {
        let key = ContextKey::new(&input.current_mood, &input.watching_context);
        let preference = self.build_preference_vector(input, &key).await;

        // The two trending fetches are independent; run them concurrently.
        // Each resolves to real data or its own fallback catalogue.
        let (movies, tv) = tokio::join!(
            self.provider.fetch_trending(MediaType::Movie),
            self.provider.fetch_trending(MediaType::Tv),
        );

        let bias = filters::PopularityBias::parse(&input.popularity_bias);

        Recommendations {
            movies: Self::rank_and_filter(movies, &preference, &key, bias),
            tv: Self::rank_and_filter(tv, &preference, &key, bias),
        }
    }

    /// Builds the hybrid preference vector from questionnaire answers plus
    /// the genres of the user's favorite movie, when it can be found.
    async fn build_preference_vector(
        &self,
        input: &RecommendationInput,
        key: &ContextKey,
    ) -> GenreVector {
        let movie_genres = match input.favorite_movie.trim() {
            "" => Vec::new(),
            title => self
                .provider
                .search_by_title(title)
                .await
                .map(|details| details.genres)
                .unwrap_or_default(),
        };

        // Union of movie genres and stated favorites; the movie list doubles
        // as the stronger first signal when the lookup succeeded.
        let mut all_favorites = movie_genres.clone();
        for name in &input.favorite_genres {
            if !all_favorites.contains(name) {
                all_favorites.push(name.clone());
            }
        }

        let movie_signal: &[String] = if movie_genres.is_empty() {
            &all_favorites
        } else {
            &movie_genres
        };

        let rule_vector = rules::build_preference(movie_signal, &all_favorites, key);
        blend::blend(&rule_vector, self.oracle.as_ref(), key)
    }

    fn rank_and_filter(
        items: Vec<crate::models::CandidateItem>,
        preference: &GenreVector,
        key: &ContextKey,
        bias: filters::PopularityBias,
    ) -> Vec<ScoredItem> {
        let ranked = rank::rank(items, preference);
        let mut result = diversity::diversify(ranked, DIVERSITY_WINDOW);

        if let Some(profile) = filters::strong_profile(key) {
            result = filters::filter_by_context(result, profile);
        }

        result = filters::filter_by_popularity(result, bias);
        result.truncate(RESULT_COUNT);
        result
    }
}
