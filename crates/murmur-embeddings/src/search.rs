//! Vector similarity search

use crate::errors::EmbeddingError;
use std::collections::HashMap;

/// Cosine similarity between two vectors of equal length.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::InvalidDimensions {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(EmbeddingError::EmptyVector);
    }

    Ok(dot / (norm_a * norm_b))
}

/// In-memory brute-force search over stored vectors
#[derive(Debug, Clone)]
pub struct SearchEngine {
    dimension: usize,
    vectors: HashMap<String, Vec<f64>>,
}

impl SearchEngine {
    /// Create an empty engine accepting vectors of `dimension` elements
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: HashMap::new(),
        }
    }

    /// Store `vector` under `id`, replacing any previous entry.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        vector: Vec<f64>,
    ) -> Result<(), EmbeddingError> {
        if vector.len() != self.dimension {
            return Err(EmbeddingError::InvalidDimensions {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        self.vectors.insert(id.into(), vector);
        Ok(())
    }

    /// Number of stored vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the engine holds no vectors
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Search for the `limit` vectors most similar to `query`, best first.
    ///
    /// Stored vectors with zero magnitude are skipped.
    pub fn search(
        &self,
        query: &[f64],
        limit: usize,
    ) -> Result<Vec<(String, f64)>, EmbeddingError> {
        if query.len() != self.dimension {
            return Err(EmbeddingError::InvalidDimensions {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut scored: Vec<(String, f64)> = self
            .vectors
            .iter()
            .filter_map(|(id, vector)| {
                cosine_similarity(query, vector)
                    .ok()
                    .map(|score| (id.clone(), score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(limit);

        tracing::debug!(
            candidates = self.vectors.len(),
            returned = scored.len(),
            "Vector search complete"
        );
        Ok(scored)
    }
}
