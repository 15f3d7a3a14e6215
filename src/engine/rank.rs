use crate::models::{CandidateItem, Genre, ScoredItem};

use super::GenreVector;

/// Maps an item's provider genre ids onto a binary presence vector over the
/// taxonomy. Unrecognized ids are skipped; there is no normalization, this is
/// an indicator, not a distribution.
pub fn vectorize(item: &CandidateItem) -> GenreVector {
    let mut vec = GenreVector::zeros();
    for &id in &item.genre_ids {
        if let Some(genre) = Genre::from_provider_id(id) {
            vec.mark(genre);
        }
    }
    vec
}

/// Scores items against the preference vector and sorts them best-first.
///
/// The sort is stable and compares only the numeric score, so tied items keep
/// their input order. Candidate payloads are heterogeneous provider records
/// and must never themselves be compared.
pub fn rank(items: Vec<CandidateItem>, preference: &GenreVector) -> Vec<ScoredItem> {
    let mut scored: Vec<ScoredItem> = items
        .into_iter()
        .map(|item| ScoredItem {
            score: preference.dot(&vectorize(&item)),
            item,
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, genre_ids: Vec<u32>) -> CandidateItem {
        CandidateItem {
            title: title.to_string(),
            release_date: "2020-01-01".to_string(),
            popularity: 50.0,
            genre_ids,
        }
    }

    #[test]
    fn test_vectorize_binary_positions() {
        let v = vectorize(&item("x", vec![28, 80]));
        assert_eq!(v.get(Genre::Action), 1.0);
        assert_eq!(v.get(Genre::Crime), 1.0);
        assert_eq!(v.sum(), 2.0);
    }

    #[test]
    fn test_vectorize_duplicate_mapped_ids() {
        // Two TV drama sub-genres collapse to one Drama bit, not two
        let v = vectorize(&item("x", vec![10763, 10766]));
        assert_eq!(v.get(Genre::Drama), 1.0);
        assert_eq!(v.sum(), 1.0);
    }

    #[test]
    fn test_vectorize_ignores_unknown_ids() {
        let v = vectorize(&item("x", vec![12345, 99]));
        assert_eq!(v.sum(), 0.0);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let mut pref = GenreVector::zeros();
        pref.boost(Genre::Romance, 0.7);
        pref.boost(Genre::Drama, 0.3);

        let ranked = rank(
            vec![
                item("action", vec![28]),
                item("romance+drama", vec![10749, 18]),
                item("drama", vec![18]),
            ],
            &pref,
        );

        assert_eq!(ranked[0].item.title, "romance+drama");
        assert_eq!(ranked[1].item.title, "drama");
        assert_eq!(ranked[2].item.title, "action");
        assert!((ranked[0].score - 1.0).abs() < 1e-9);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_rank_ties_preserve_input_order() {
        let mut pref = GenreVector::zeros();
        pref.boost(Genre::Comedy, 1.0);

        let ranked = rank(
            vec![
                item("first", vec![35]),
                item("second", vec![35]),
                item("third", vec![35]),
            ],
            &pref,
        );

        let titles: Vec<&str> = ranked.iter().map(|s| s.item.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
