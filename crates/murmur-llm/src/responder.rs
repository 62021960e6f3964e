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

//! Chat responder with fallback replies

use crate::config::GeminiConfig;
use crate::errors::LlmError;
use crate::fallback::FallbackPool;
use crate::messages::{extract_prompt, ChatMessage};
use crate::providers::{GeminiProvider, LlmProvider};
use std::sync::Arc;

/// Produces one reply per conversation.
///
/// Without a provider every call answers from
/// [`FallbackPool::MISSING_CREDENTIAL`]; provider failures answer from
/// [`FallbackPool::PROVIDER_FAILURE`].
#[derive(Clone)]
pub struct ChatResponder {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl ChatResponder {
    /// Create a responder from `config`.
    ///
    /// A missing API key is not an error: the responder is built without a
    /// provider and answers from the fallback pool.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        match GeminiProvider::from_config(&config) {
            Ok(provider) => Ok(Self::with_provider(Arc::new(provider))),
            Err(LlmError::MissingCredential) => Ok(Self::offline()),
            Err(e) => Err(e),
        }
    }

    /// Create a responder configured from `GEMINI_*` environment variables
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(GeminiConfig::from_env())
    }

    /// Create a responder backed by `provider`
    pub fn with_provider(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Create a responder that never contacts a provider
    pub fn offline() -> Self {
        Self { provider: None }
    }

    /// Whether a provider is configured
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Ask the provider for a reply to the last message.
    ///
    /// Returns [`LlmError::MissingCredential`] without any request when no
    /// provider is configured, and [`LlmError::MissingMessage`] without any
    /// request when there is no last message.
    pub async fn try_respond(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let provider = self.provider.as_ref().ok_or(LlmError::MissingCredential)?;
        let prompt = extract_prompt(messages).ok_or(LlmError::MissingMessage)?;
        provider.generate(&prompt).await
    }

    /// Reply to the last message. Never fails.
    pub async fn respond(&self, messages: &[ChatMessage]) -> String {
        match self.try_respond(messages).await {
            Ok(reply) => reply,
            Err(LlmError::MissingCredential) => {
                tracing::warn!("GEMINI_API_KEY not found, using fallback responses");
                FallbackPool::MISSING_CREDENTIAL.pick()
            }
            Err(e) => {
                let (provider, model) = self
                    .provider
                    .as_ref()
                    .map_or(("none", "none"), |p| (p.name(), p.model()));
                tracing::error!(
                    provider,
                    model,
                    error = %e,
                    "LLM request failed, using fallback response"
                );
                FallbackPool::PROVIDER_FAILURE.pick()
            }
        }
    }
}
