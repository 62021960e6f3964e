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

//! LLM provider implementations

use crate::config::GeminiConfig;
use crate::errors::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for text-generation providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Model identifier requests are sent to
    fn model(&self) -> &str;

    /// Generate a reply for a single prompt.
    ///
    /// Implementations issue at most one request and return the reply text
    /// without post-processing.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Finish reasons after which the candidate text must not be used
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn into_text(self) -> Result<String, LlmError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LlmError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BLOCKING_FINISH_REASONS.contains(&reason) {
                return Err(LlmError::Blocked(reason.to_string()));
            }
        }

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Google Gemini provider implementation
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider for `model` on the public endpoint
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, crate::config::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new Gemini provider with custom base URL
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a provider from `config`; fails when no API key is set.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, LlmError> {
        let api_key = match config.api_key.as_deref() {
            Some(key) if config.has_credential() => key,
            _ => return Err(LlmError::MissingCredential),
        };

        if config.model.trim().is_empty() {
            return Err(LlmError::ConfigurationError(
                "model identifier is empty".to_string(),
            ));
        }

        Ok(Self::with_base_url(
            api_key.to_string(),
            config.model.clone(),
            config.base_url.clone(),
        ))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::ApiError(format!(
                "Gemini error {}: {}",
                status, text
            )));
        }

        let bytes = resp.bytes().await?;
        let api_response: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        api_response.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> GeminiProvider {
        GeminiProvider::with_base_url("test-key".into(), "gemini-pro".into(), server.uri())
    }

    fn parse(value: serde_json::Value) -> Result<String, LlmError> {
        serde_json::from_value::<GenerateContentResponse>(value)
            .unwrap()
            .into_text()
    }

    #[test]
    fn test_from_config_requires_key() {
        let err = GeminiProvider::from_config(&GeminiConfig::default()).err();
        assert!(matches!(err, Some(LlmError::MissingCredential)));

        let config = GeminiConfig::default().with_api_key("k").with_model(" ");
        let err = GeminiProvider::from_config(&config).err();
        assert!(matches!(err, Some(LlmError::ConfigurationError(_))));

        // Keys set directly on the struct go through the same blank check.
        let config = GeminiConfig {
            api_key: Some("  ".to_string()),
            ..GeminiConfig::default()
        };
        let err = GeminiProvider::from_config(&config).err();
        assert!(matches!(err, Some(LlmError::MissingCredential)));

        let config = GeminiConfig::default().with_api_key("k");
        let provider = GeminiProvider::from_config(&config).unwrap();
        assert_eq!(provider.model(), "gemini-pro");
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let text = parse(json!({
            "candidates": [
                {
                    "content": {"parts": [{"text": "Hello"}, {"text": ", world"}]},
                    "finishReason": "STOP"
                },
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(text, "Hello, world");
    }

    #[test]
    fn test_response_text_is_not_trimmed() {
        let text = parse(json!({
            "candidates": [{"content": {"parts": [{"text": "  padded\n"}]}}]
        }))
        .unwrap();
        assert_eq!(text, "  padded\n");
    }

    #[test]
    fn test_blocked_and_empty_responses() {
        let blocked = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        assert!(matches!(blocked, Err(LlmError::Blocked(reason)) if reason == "SAFETY"));

        let filtered = parse(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        assert!(matches!(filtered, Err(LlmError::Blocked(_))));

        assert!(matches!(parse(json!({})), Err(LlmError::EmptyResponse)));
        assert!(matches!(
            parse(json!({"candidates": [{"content": {"parts": []}}]})),
            Err(LlmError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_generate_sends_single_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-pro:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "hello"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "hi there"}], "role": "model"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = provider_for(&server).generate("hello").await.unwrap();
        assert_eq!(reply, "hi there");
    }

    #[tokio::test]
    async fn test_generate_maps_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        match err {
            LlmError::ApiError(message) => {
                assert!(message.contains("403"));
                assert!(message.contains("API key not valid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::JsonError(_)));
    }
}
