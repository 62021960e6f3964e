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


#![warn(missing_docs)]

//! Placeholder vector embeddings and similarity search for murmur.
//!
//! This crate provides:
//! - Deterministic hash-derived text embeddings
//! - Cosine similarity and in-memory vector search

pub mod embeddings;
pub mod errors;
pub mod search;

pub use embeddings::{
    embed, rolling_hash, EmbeddingVector, HashEmbeddingGenerator, EMBEDDING_DIMENSION,
};
pub use errors::EmbeddingError;
pub use search::{cosine_similarity, SearchEngine};
