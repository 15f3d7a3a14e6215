use crate::models::{Genre, GENRE_COUNT};

/// A weighted vector over the genre taxonomy.
///
/// The rule engine produces one of these per request, the blender combines
/// two of them, and the ranker dots them against item vectorizations. Entries
/// are indexed by [`Genre::index`] and are never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreVector([f64; GENRE_COUNT]);

impl GenreVector {
    /// All-zero vector
    pub fn zeros() -> Self {
        Self([0.0; GENRE_COUNT])
    }

    pub fn from_array(values: [f64; GENRE_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, genre: Genre) -> f64 {
        self.0[genre.index()]
    }

    /// Adds `weight` to the genre's entry
    pub fn boost(&mut self, genre: Genre, weight: f64) {
        self.0[genre.index()] += weight;
    }

    /// Marks the genre as present (used by the binary item vectorizer)
    pub fn mark(&mut self, genre: Genre) {
        self.0[genre.index()] = 1.0;
    }

    /// Multiplies the genre's entry by `factor`
    pub fn scale_genre(&mut self, genre: Genre, factor: f64) {
        self.0[genre.index()] *= factor;
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Divides every entry by the vector sum. A sum of exactly zero leaves
    /// the vector unchanged: no signal is a valid terminal state, not an
    /// error.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            for entry in &mut self.0 {
                *entry /= sum;
            }
        }
    }

    pub fn dot(&self, other: &GenreVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Element-wise `alpha * a + beta * b`
    pub fn combine(alpha: f64, a: &GenreVector, beta: f64, b: &GenreVector) -> GenreVector {
        let mut out = [0.0; GENRE_COUNT];
        for (i, entry) in out.iter_mut().enumerate() {
            *entry = alpha * a.0[i] + beta * b.0[i];
        }
        GenreVector(out)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
