//! Dialog Messages
//!
//! Text shown to the end user by the conversational front-end.

use serde::{Deserialize, Serialize};

/// Format of a message body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// Plain text
    #[default]
    PlainText,
    /// Speech synthesis markup
    #[serde(rename = "SSML")]
    Ssml,
    /// Client-defined payload
    CustomPayload,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::PlainText => write!(f, "PlainText"),
            ContentType::Ssml => write!(f, "SSML"),
            ContentType::CustomPayload => write!(f, "CustomPayload"),
        }
    }
}

/// A message addressed to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Body format
    pub content_type: ContentType,

    /// Body
    pub content: String,
}

impl Message {
    pub fn new(content_type: ContentType, content: impl Into<String>) -> Self {
        Self {
            content_type,
            content: content.into(),
        }
    }

    /// Create a plain text message
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(ContentType::PlainText, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_message_wire_format() {
        let msg = Message::plain("Hello");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"contentType": "PlainText", "content": "Hello"})
        );
    }

    #[test]
    fn test_ssml_content_type() {
        let msg: Message =
            serde_json::from_value(json!({"contentType": "SSML", "content": "<speak/>"})).unwrap();
        assert_eq!(msg.content_type, ContentType::Ssml);
        assert_eq!(msg.content_type.to_string(), "SSML");
    }
}
