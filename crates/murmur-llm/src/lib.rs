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

//! Chat replies backed by Google Gemini, with canned fallbacks.
//!
//! This crate provides:
//! - A Gemini `generateContent` client behind the [`LlmProvider`] trait
//! - Lenient parsing of string-or-object conversation messages
//! - A [`ChatResponder`] that always produces a reply, falling back to
//!   fixed phrases when no key is configured or the request fails

pub mod config;
pub mod errors;
pub mod fallback;
pub mod messages;
pub mod providers;
pub mod responder;

pub use config::GeminiConfig;
pub use errors::LlmError;
pub use fallback::FallbackPool;
pub use messages::{extract_prompt, ChatMessage};
pub use providers::{GeminiProvider, LlmProvider};
pub use responder::ChatResponder;
