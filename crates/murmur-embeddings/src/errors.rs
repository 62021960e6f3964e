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


//! Error types for similarity search

use thiserror::Error;

/// Errors that can occur when comparing or storing vectors
#[derive(Error, Debug, PartialEq)]
pub enum EmbeddingError {
    /// Vector length does not match
    #[error("Invalid dimensions: expected {expected}, got {actual}")]
    InvalidDimensions {
        /// Length required
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// Vector has zero magnitude, so no direction to compare
    #[error("Vector has zero magnitude")]
    EmptyVector,
}
