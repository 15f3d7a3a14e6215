use crate::oracle::CorrectionOracle;

use super::{ContextKey, GenreVector};

/// Linear combination weights for the hybrid preference vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    /// Weight on the rule vector (alpha)
    pub rules: f64,
    /// Weight on the oracle correction (beta)
    pub learned: f64,
}

const RULES_ONLY: BlendWeights = BlendWeights {
    rules: 1.0,
    learned: 0.0,
};

const HYBRID: BlendWeights = BlendWeights {
    rules: 0.85,
    learned: 0.15,
};

/// Selects blend weights for a context key. Strong pairs pin the blend to
/// rules-only; every other pair gets the hybrid split.
pub fn blend_weights(key: &ContextKey) -> BlendWeights {
    if key.is_strong() {
        RULES_ONLY
    } else {
        HYBRID
    }
}

/// Combines the rule vector with the oracle's correction.
///
/// The oracle call is best-effort by contract: an unavailable or degraded
/// oracle returns its input unchanged, which collapses the combination to the
/// rule vector without any special-casing here.
pub fn blend(
    rule_vector: &GenreVector,
    oracle: &dyn CorrectionOracle,
    key: &ContextKey,
) -> GenreVector {
    let weights = blend_weights(key);

    if weights.learned == 0.0 {
        tracing::debug!(key = %key, "Rules-only mode");
        return rule_vector.clone();
    }

    let correction = oracle.predict(rule_vector);
    tracing::debug!(key = %key, oracle = oracle.name(), "Hybrid mode");
    GenreVector::combine(weights.rules, rule_vector, weights.learned, &correction)
}
