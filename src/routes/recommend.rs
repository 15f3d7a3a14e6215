use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::engine::{RecommendationInput, Recommender};
use crate::models::ScoredItem;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub favorite_movie: String,
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    pub current_mood: String,
    pub watching_context: String,
    #[serde(default)]
    pub popularity_bias: String,
}

#[derive(Debug, Serialize)]
pub struct MediaItem {
    pub title: String,
    pub year: String,
    pub popularity: f64,
}

impl From<&ScoredItem> for MediaItem {
    fn from(scored: &ScoredItem) -> Self {
        Self {
            title: scored.item.title.clone(),
            year: scored.item.year(),
            popularity: scored.item.popularity,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct RecommendResponse {
    pub movies: Vec<MediaItem>,
    pub tv: Vec<MediaItem>,
}

/// Handler for the recommendation endpoint.
///
/// The pipeline itself degrades internally (provider fallbacks, identity
/// oracle), so the only remaining failure mode is a panicking task; that is
/// caught here and converted into an empty, well-formed response rather than
/// a 500.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let input = RecommendationInput {
        favorite_movie: request.favorite_movie,
        favorite_genres: request.favorite_genres,
        current_mood: request.current_mood,
        watching_context: request.watching_context,
        popularity_bias: request.popularity_bias,
    };

    let recommender = Recommender::new(state.provider.clone(), state.oracle.clone());
    let result = tokio::spawn(async move { recommender.recommend(&input).await }).await;

    match result {
        Ok(recommendations) => {
            tracing::info!(
                movies = recommendations.movies.len(),
                tv = recommendations.tv.len(),
                "Recommendation request completed"
            );
            Json(RecommendResponse {
                movies: recommendations.movies.iter().map(MediaItem::from).collect(),
                tv: recommendations.tv.iter().map(MediaItem::from).collect(),
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "Recommendation pipeline failed");
            Json(RecommendResponse::default())
        }
    }
}
