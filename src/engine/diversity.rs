use std::collections::HashSet;

use crate::models::ScoredItem;

/// Maximum share of an item's score the overlap penalty may remove
const PENALTY_STRENGTH: f64 = 0.3;

/// Jaccard similarity of two genre-id sets. Pairs where either set is empty
/// carry no signal and are excluded from the overlap average entirely.
fn jaccard(a: &HashSet<u32>, b: &HashSet<u32>) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    Some(intersection / union)
}

/// Re-ranks the top `window` items to spread genre variety.
///
/// Greedy sequential pass in descending-score order: the first item keeps its
/// score; each later item is penalized by `(1 - 0.3 * avg_overlap)` where
/// `avg_overlap` averages its Jaccard similarity against every already
/// selected item. The window is then re-sorted stably by adjusted score.
/// Items beyond the window keep their original order and score. Inputs no
/// longer than the window are returned unchanged.
pub fn diversify(ranked: Vec<ScoredItem>, window: usize) -> Vec<ScoredItem> {
    if ranked.len() <= window {
        return ranked;
    }

    let mut iter = ranked.into_iter();
    let head: Vec<ScoredItem> = iter.by_ref().take(window).collect();
    let tail: Vec<ScoredItem> = iter.collect();

    let mut selected: Vec<(ScoredItem, HashSet<u32>)> = Vec::with_capacity(window);
    for mut scored in head {
        let genres: HashSet<u32> = scored.item.genre_ids.iter().copied().collect();

        if !selected.is_empty() {
            let overlaps: Vec<f64> = selected
                .iter()
                .filter_map(|(_, other)| jaccard(&genres, other))
                .collect();
            let avg_overlap = if overlaps.is_empty() {
                0.0
            } else {
                overlaps.iter().sum::<f64>() / overlaps.len() as f64
            };
            scored.score *= 1.0 - PENALTY_STRENGTH * avg_overlap;
        }

        selected.push((scored, genres));
    }

    let mut result: Vec<ScoredItem> = selected.into_iter().map(|(s, _)| s).collect();
    result.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    result.extend(tail);
    result
}
