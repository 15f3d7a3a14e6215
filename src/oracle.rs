use std::sync::Arc;

use serde::Deserialize;

use crate::engine::GenreVector;
use crate::models::GENRE_COUNT;

/// Learned correction applied on top of the rule-based preference vector.
///
/// The oracle is opaque to the engine: a 12-dimensional vector goes in, a
/// 12-dimensional vector comes out. Implementations must be infallible;
/// anything that cannot produce a sensible correction returns its input
/// unchanged so the pipeline degrades to rules-only behavior.
pub trait CorrectionOracle: Send + Sync {
    fn predict(&self, vector: &GenreVector) -> GenreVector;

    /// Oracle name for logging
    fn name(&self) -> &'static str;
}

/// Oracle used when no model is available; the blend then reduces to the
/// rule vector regardless of the hybrid weights.
pub struct IdentityOracle;

impl CorrectionOracle for IdentityOracle {
    fn predict(&self, vector: &GenreVector) -> GenreVector {
        vector.clone()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Serialized form of the trained correction model: a dense linear map over
/// the taxonomy. Produced offline by the training job.
#[derive(Debug, Deserialize)]
struct LinearModel {
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

/// Correction oracle backed by a trained linear model
pub struct LinearOracle {
    model: LinearModel,
}

impl LinearOracle {
    /// Loads a model from a JSON file, validating its dimensions
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let model: LinearModel = serde_json::from_str(&raw)?;

        if model.bias.len() != GENRE_COUNT
            || model.weights.len() != GENRE_COUNT
            || model.weights.iter().any(|row| row.len() != GENRE_COUNT)
        {
            anyhow::bail!(
                "correction model has wrong shape: expected {0}x{0} weights and {0} bias entries",
                GENRE_COUNT
            );
        }

        Ok(Self { model })
    }
}

impl CorrectionOracle for LinearOracle {
    fn predict(&self, vector: &GenreVector) -> GenreVector {
        let input = vector.as_slice();
        let mut output = [0.0; GENRE_COUNT];

        for (i, out) in output.iter_mut().enumerate() {
            let row = &self.model.weights[i];
            let weighted: f64 = row.iter().zip(input.iter()).map(|(w, x)| w * x).sum();
            // Corrections must stay non-negative like the rule vector itself
            *out = (self.model.bias[i] + weighted).max(0.0);
        }

        GenreVector::from_array(output)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Loads the configured correction model, degrading to the identity oracle
/// when no path is configured or the file cannot be read.
pub fn load_oracle(model_path: Option<&str>) -> Arc<dyn CorrectionOracle> {
    match model_path {
        Some(path) => match LinearOracle::from_file(path) {
            Ok(oracle) => {
                tracing::info!(path = %path, "Correction model loaded");
                Arc::new(oracle)
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Correction model load failed, using identity oracle");
                Arc::new(IdentityOracle)
            }
        },
        None => {
            tracing::info!("No correction model configured, using identity oracle");
            Arc::new(IdentityOracle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    fn identity_model() -> LinearOracle {
        let mut weights = vec![vec![0.0; GENRE_COUNT]; GENRE_COUNT];
        for (i, row) in weights.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        LinearOracle {
            model: LinearModel {
                weights,
                bias: vec![0.0; GENRE_COUNT],
            },
        }
    }

    #[test]
    fn test_identity_oracle_returns_input() {
        let mut v = GenreVector::zeros();
        v.boost(Genre::Comedy, 0.7);
        assert_eq!(IdentityOracle.predict(&v), v);
    }

    #[test]
    fn test_linear_oracle_identity_weights() {
        let oracle = identity_model();
        let mut v = GenreVector::zeros();
        v.boost(Genre::Drama, 0.4);
        v.boost(Genre::Mystery, 0.6);
        let out = oracle.predict(&v);
        assert!((out.get(Genre::Drama) - 0.4).abs() < 1e-9);
        assert!((out.get(Genre::Mystery) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_linear_oracle_clamps_negative_output() {
        let mut oracle = identity_model();
        oracle.model.bias[Genre::Horror.index()] = -5.0;
        let mut v = GenreVector::zeros();
        v.boost(Genre::Horror, 1.0);
        let out = oracle.predict(&v);
        assert_eq!(out.get(Genre::Horror), 0.0);
    }

    #[test]
    fn test_load_oracle_missing_file_falls_back() {
        let oracle = load_oracle(Some("/nonexistent/model.json"));
        assert_eq!(oracle.name(), "identity");
    }

    #[test]
    fn test_load_oracle_unconfigured() {
        let oracle = load_oracle(None);
        assert_eq!(oracle.name(), "identity");
    }

    #[test]
    fn test_from_file_rejects_wrong_shape() {
        let dir = std::env::temp_dir().join("cinematch-oracle-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad_model.json");
        std::fs::write(&path, r#"{"weights": [[1.0, 2.0]], "bias": [0.0]}"#).unwrap();

        let result = LinearOracle::from_file(path.to_str().unwrap());
        assert!(result.is_err());
    }
}
