pub mod blend;
pub mod context;
pub mod diversity;
pub mod filters;
pub mod pipeline;
pub mod rank;
pub mod rules;
pub mod vector;

pub use context::ContextKey;
pub use pipeline::{RecommendationInput, Recommendations, Recommender};
pub use vector::GenreVector;
