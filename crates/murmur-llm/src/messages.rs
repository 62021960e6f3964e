//! Conversational message shapes accepted by the chat responder

use serde::{Deserialize, Serialize};

/// A conversational turn.
///
/// Callers send either a bare string or an object with a `content` or
/// `text` field. Any other JSON shape is kept as [`ChatMessage::Other`] and
/// contributes an empty prompt, except `null`, which counts as no message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatMessage {
    /// A bare utterance
    PlainText(String),
    /// An object carrying the utterance in `content` or `text`
    Structured {
        /// Primary utterance field
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        /// Secondary utterance field, used when `content` is missing or empty
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// Anything else
    Other(serde_json::Value),
}

impl ChatMessage {
    /// Structured message with a `content` field
    pub fn content(content: impl Into<String>) -> Self {
        Self::Structured {
            content: Some(content.into()),
            text: None,
        }
    }

    /// Structured message with a `text` field
    pub fn text(text: impl Into<String>) -> Self {
        Self::Structured {
            content: None,
            text: Some(text.into()),
        }
    }

    /// The prompt text carried by this message.
    ///
    /// Empty `content` falls through to `text`; an empty string is
    /// returned when neither holds anything.
    pub fn prompt_text(&self) -> &str {
        match self {
            Self::PlainText(text) => text.as_str(),
            Self::Structured { content, text } => content
                .as_deref()
                .filter(|c| !c.is_empty())
                .or_else(|| text.as_deref().filter(|t| !t.is_empty()))
                .unwrap_or(""),
            Self::Other(_) => "",
        }
    }
}

impl From<&str> for ChatMessage {
    fn from(text: &str) -> Self {
        Self::PlainText(text.to_string())
    }
}

impl From<String> for ChatMessage {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}

/// Extract the prompt from the last message. Earlier turns are ignored.
///
/// Returns `None` for an empty conversation or a `null` last message.
pub fn extract_prompt(messages: &[ChatMessage]) -> Option<String> {
    match messages.last() {
        None | Some(ChatMessage::Other(serde_json::Value::Null)) => None,
        Some(message) => Some(message.prompt_text().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ChatMessage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_from_each_shape() {
        assert_eq!(extract_prompt(&["hello".into()]).as_deref(), Some("hello"));
        assert_eq!(extract_prompt(&[ChatMessage::content("hi")]).as_deref(), Some("hi"));
        assert_eq!(extract_prompt(&[ChatMessage::text("yo")]).as_deref(), Some("yo"));
        assert_eq!(
            extract_prompt(&[ChatMessage::Structured {
                content: None,
                text: None
            }])
            .as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_only_last_message_is_used() {
        let messages = vec![
            ChatMessage::from("first"),
            ChatMessage::content("second"),
            ChatMessage::from("third"),
        ];
        assert_eq!(extract_prompt(&messages).as_deref(), Some("third"));
    }

    #[test]
    fn test_missing_last_message_yields_no_prompt() {
        assert_eq!(extract_prompt(&[]), None);
        assert_eq!(extract_prompt(&[ChatMessage::Other(serde_json::Value::Null)]), None);

        let messages = vec![ChatMessage::from("earlier"), parse(json!(null))];
        assert_eq!(extract_prompt(&messages), None);

        // Other non-null shapes still produce an (empty) prompt.
        assert_eq!(extract_prompt(&[parse(json!(42))]).as_deref(), Some(""));
    }

    #[test]
    fn test_empty_content_falls_through_to_text() {
        let message = ChatMessage::Structured {
            content: Some(String::new()),
            text: Some("fallback".to_string()),
        };
        assert_eq!(message.prompt_text(), "fallback");

        let both = ChatMessage::Structured {
            content: Some("primary".to_string()),
            text: Some("secondary".to_string()),
        };
        assert_eq!(both.prompt_text(), "primary");
    }

    #[test]
    fn test_plain_text_is_verbatim() {
        assert_eq!(ChatMessage::from("  spaced  ").prompt_text(), "  spaced  ");
    }

    #[test]
    fn test_deserialize_json_shapes() {
        assert_eq!(parse(json!("hello")), ChatMessage::from("hello"));
        assert_eq!(parse(json!({"content": "hi"})).prompt_text(), "hi");
        assert_eq!(parse(json!({"text": "yo"})).prompt_text(), "yo");
        assert_eq!(
            parse(json!({"role": "user", "content": "hi"})).prompt_text(),
            "hi"
        );
        assert_eq!(parse(json!({})).prompt_text(), "");
    }

    #[test]
    fn test_malformed_shapes_yield_empty_prompt() {
        assert_eq!(parse(json!(42)).prompt_text(), "");
        assert_eq!(parse(json!(null)).prompt_text(), "");
        assert_eq!(
            parse(json!({"content": ["not", "a", "string"]})).prompt_text(),
            ""
        );
    }
}
