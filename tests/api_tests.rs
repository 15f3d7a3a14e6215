use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::json;

use cinematch_api::models::{CandidateItem, MediaType};
use cinematch_api::oracle::IdentityOracle;
use cinematch_api::providers::{ContentProvider, TitleDetails, TmdbProvider};
use cinematch_api::routes::{create_router, AppState};

/// Server backed by a provider without an API key, so every fetch serves the
/// static fallback catalogues and no network traffic happens.
fn create_test_server() -> TestServer {
    let provider = TmdbProvider::new(
        None,
        "http://test.local".to_string(),
        Duration::from_secs(1),
    );
    let state = AppState::new(Arc::new(provider), Arc::new(IdentityOracle));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommend_returns_ranked_lists() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommend")
        .json(&json!({
            "favorite_movie": "",
            "favorite_genres": ["Comedy", "Action"],
            "current_mood": "happy",
            "watching_context": "friends",
            "popularity_bias": "mix"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let movies = body["movies"].as_array().unwrap();
    let tv = body["tv"].as_array().unwrap();
    assert!(!movies.is_empty() && movies.len() <= 5);
    assert!(!tv.is_empty() && tv.len() <= 5);

    for item in movies.iter().chain(tv.iter()) {
        assert!(item["title"].as_str().is_some_and(|t| !t.is_empty()));
        let year = item["year"].as_str().unwrap();
        assert!(year == "N/A" || year.len() == 4);
        assert!(item["popularity"].as_f64().is_some());
    }
}

#[tokio::test]
async fn test_recommend_popular_bias_empties_fallback_results() {
    // Every fallback item has popularity below the popular cutoff
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommend")
        .json(&json!({
            "favorite_genres": ["Drama"],
            "current_mood": "sad",
            "watching_context": "alone",
            "popularity_bias": "popular"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);
    assert_eq!(body["tv"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_recommend_optional_fields_default() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommend")
        .json(&json!({
            "current_mood": "relaxed",
            "watching_context": "alone"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["movies"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
async fn test_recommend_strong_context_yields_results() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommend")
        .json(&json!({
            "favorite_genres": ["Romance"],
            "current_mood": "romantic",
            "watching_context": "with my partner",
            "popularity_bias": "underrated"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    // The relaxation fallback guarantees the strong filter never empties
    // the fallback catalogue entirely
    assert!(!body["movies"].as_array().unwrap().is_empty());
}

/// Provider whose fetches blow up, for exercising the handler's outermost
/// failure boundary
struct PanickingProvider;

#[async_trait::async_trait]
impl ContentProvider for PanickingProvider {
    async fn fetch_trending(&self, media_type: MediaType) -> Vec<CandidateItem> {
        panic!("trending fetch exploded for {media_type}");
    }

    async fn search_by_title(&self, _title: &str) -> Option<TitleDetails> {
        None
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

#[tokio::test]
async fn test_recommend_panicking_pipeline_yields_empty_body() {
    let state = AppState::new(Arc::new(PanickingProvider), Arc::new(IdentityOracle));
    let server = TestServer::new(create_router(state)).unwrap();

    let response = server
        .post("/api/v1/recommend")
        .json(&json!({
            "favorite_genres": ["Comedy"],
            "current_mood": "happy",
            "watching_context": "alone"
        }))
        .await;

    // A crashed pipeline task still answers 200 with both lists empty
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);
    assert_eq!(body["tv"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_request_id_header_echoed() {
    let server = create_test_server();
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
