//! Error types for LLM operations

use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured; no request was attempted
    #[error("No API key configured for the LLM provider")]
    MissingCredential,

    /// Conversation has no last message to reply to
    #[error("No message to reply to")]
    MissingMessage,

    /// API request failed
    #[error("API request failed: {0}")]
    ApiError(String),

    /// Prompt or reply was blocked by the provider's safety filters
    #[error("Response blocked by provider: {0}")]
    Blocked(String),

    /// Provider returned no usable text
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// Invalid provider configuration
    #[error("Invalid provider configuration: {0}")]
    ConfigurationError(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
