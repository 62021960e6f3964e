// Copyright 2024 Murmur Contributors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Embedding generation
//!
//! The hosted chat provider exposes no embedding endpoint, so vectors are
//! derived from a rolling hash of the input. The output is stable across
//! runs and implementations, but carries no semantic meaning.

/// Number of elements in every generated embedding
pub const EMBEDDING_DIMENSION: usize = 1024;

/// A fixed-length embedding vector with elements in `[0, 1)`
pub type EmbeddingVector = Vec<f64>;

/// Rolling `hash * 31 + unit` hash folded into a signed 32-bit word.
///
/// Iterates UTF-16 code units, so characters outside the Basic Multilingual
/// Plane contribute both surrogate halves.
pub fn rolling_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Placeholder embedding generator backed by [`rolling_hash`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEmbeddingGenerator;

impl HashEmbeddingGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Generate the embedding for `text`.
    ///
    /// Element `i` is the fractional part of `sin(hash + i) * 10000`. The
    /// seed is formed in `f64` and never wraps at 32 bits.
    pub fn generate_text_embedding(&self, text: &str) -> EmbeddingVector {
        let hash = f64::from(rolling_hash(text));

        (0..EMBEDDING_DIMENSION)
            .map(|i| {
                let seed = hash + i as f64;
                let x = seed.sin() * 10000.0;
                x - x.floor()
            })
            .collect()
    }
}

/// Embed `text` without touching the network.
pub async fn embed(text: &str) -> EmbeddingVector {
    HashEmbeddingGenerator.generate_text_embedding(text)
}
