use crate::models::Genre;

use super::{ContextKey, GenreVector};

/// Weight added per recognized genre from each favorite-genre signal source
const FAVORITE_WEIGHT: f64 = 0.50;

/// Additive boosts per watching context
fn context_boosts(context: &str) -> &'static [(Genre, f64)] {
    match context {
        "friends" => &[
            (Genre::Comedy, 0.40),
            (Genre::Action, 0.35),
            (Genre::Adventure, 0.25),
        ],
        "partner" => &[(Genre::Romance, 0.60), (Genre::Drama, 0.40)],
        "family" => &[
            (Genre::Animation, 0.45),
            (Genre::Comedy, 0.35),
            (Genre::Adventure, 0.25),
        ],
        "alone" => &[
            (Genre::Drama, 0.30),
            (Genre::Thriller, 0.25),
            (Genre::Mystery, 0.20),
        ],
        _ => &[],
    }
}

/// Additive boosts per mood
fn mood_boosts(mood: &str) -> &'static [(Genre, f64)] {
    match mood {
        "happy" => &[
            (Genre::Comedy, 0.50),
            (Genre::Romance, 0.30),
            (Genre::Adventure, 0.20),
        ],
        "excited" => &[
            (Genre::Action, 0.50),
            (Genre::Thriller, 0.40),
            (Genre::Adventure, 0.30),
        ],
        "romantic" => &[(Genre::Romance, 0.70), (Genre::Drama, 0.40)],
        "sad" => &[(Genre::Drama, 0.50), (Genre::Romance, 0.30)],
        "scared" => &[(Genre::Horror, 0.60), (Genre::Thriller, 0.40)],
        "relaxed" => &[(Genre::Drama, 0.40), (Genre::Comedy, 0.30)],
        _ => &[],
    }
}

/// Multiplicative penalties for mismatched (mood, context) combinations.
/// Applied after all additive boosts and before normalization.
fn penalties(key: &ContextKey) -> &'static [(Genre, f64)] {
    match (key.mood(), key.context()) {
        ("romantic", "partner") => &[
            (Genre::Action, 0.2),
            (Genre::Horror, 0.2),
            (Genre::Thriller, 0.2),
            (Genre::SciFi, 0.2),
        ],
        ("scared", "alone") => &[
            (Genre::Comedy, 0.2),
            (Genre::Romance, 0.2),
            (Genre::Animation, 0.2),
        ],
        ("excited", "friends") => &[(Genre::Drama, 0.3), (Genre::Romance, 0.3)],
        _ => &[],
    }
}

/// Builds the rule-based preference vector from the four signal sources.
///
/// Unrecognized genre names are silently skipped; an unknown mood or context
/// simply contributes nothing. The result sums to 1 unless no signal was
/// present at all, in which case it stays all-zero.
pub fn build_preference(
    favorite_movie_genres: &[String],
    favorite_genres: &[String],
    key: &ContextKey,
) -> GenreVector {
    let mut vec = GenreVector::zeros();

    for name in favorite_movie_genres {
        if let Some(genre) = Genre::from_name(name) {
            vec.boost(genre, FAVORITE_WEIGHT);
        }
    }

    for name in favorite_genres {
        if let Some(genre) = Genre::from_name(name) {
            vec.boost(genre, FAVORITE_WEIGHT);
        }
    }

    for &(genre, weight) in context_boosts(key.context()) {
        vec.boost(genre, weight);
    }

    for &(genre, weight) in mood_boosts(key.mood()) {
        vec.boost(genre, weight);
    }

    for &(genre, factor) in penalties(key) {
        vec.scale_genre(genre, factor);
    }

    vec.normalize();
    vec
}
