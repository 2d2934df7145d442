use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Transcript role enumeration.
///
/// Uses lowercase string serialization to match the canonical message shape:
/// "system" | "user" | "assistant". Anything else is preserved verbatim in
/// [`Role::Other`] — the converters route unrecognized roles through their
/// default branches rather than rejecting them, and the labeled-lines
/// converter needs the original text for its speaker label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    System,
    User,
    Assistant,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(s) => s,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from(s.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Inline image reference carried by a multimodal message.
///
/// `data` is the provider-ready payload (base64 for the Google wire shape);
/// this crate forwards it opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    pub data: String,
}

fn default_mime_type() -> String {
    "image/png".to_string()
}

/// Structured content for messages that pair text with an optional image.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultimodalContent {
    pub text: String,
    #[serde(default)]
    pub image: Option<ImageData>,
}

/// Message content: either a plain string or a text-plus-image pair.
///
/// Modeled as a tagged union instead of shape-probing a loose JSON value;
/// `serde(untagged)` keeps the wire shape a bare string for the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Multimodal(MultimodalContent),
}

impl MessageContent {
    /// Text view of the content, used by every converter that renders
    /// human-readable output.
    pub fn as_text(&self) -> &str {
        match self {
            MessageContent::Text(s) => s,
            MessageContent::Multimodal(m) => &m.text,
        }
    }

    /// Inline image, if this content carries one.
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            MessageContent::Multimodal(m) => m.image.as_ref(),
            MessageContent::Text(_) => None,
        }
    }

    /// Rewrite the textual part to `"<speaker>: <text>"`.
    pub(crate) fn fold_speaker(&mut self, speaker: &str) {
        let text = match self {
            MessageContent::Text(s) => s,
            MessageContent::Multimodal(m) => &mut m.text,
        };
        *text = format!("{speaker}: {text}");
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Text(s.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Text(s)
    }
}

/// One unit of the transcript.
///
/// `name` doubles as a generic speaker label and, on system messages, as the
/// sentinel selecting the example-conversation connectors (`example_user`,
/// `example_assistant`) in the turn-markup converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: MessageContent,
}

impl Message {
    pub fn new(role: Role, content: impl Into<MessageContent>) -> Self {
        Self {
            role,
            name: None,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(Role::from("assistant"), Role::Assistant);
        assert_eq!(Role::from("tool"), Role::Other("tool".into()));
        assert_eq!(Role::Other("tool".into()).as_str(), "tool");
        assert_eq!(String::from(Role::System), "system");
    }

    #[test]
    fn content_deserializes_both_shapes() {
        let text: MessageContent = serde_json::from_value(json!("hello")).unwrap();
        assert_eq!(text.as_text(), "hello");
        assert!(text.image().is_none());

        let multimodal: MessageContent = serde_json::from_value(json!({
            "text": "what is this?",
            "image": { "mime_type": "image/png", "data": "AAAA" }
        }))
        .unwrap();
        assert_eq!(multimodal.as_text(), "what is this?");
        assert_eq!(multimodal.image().unwrap().data, "AAAA");
    }

    #[test]
    fn image_mime_type_defaults_to_png() {
        let img: ImageData = serde_json::from_value(json!({ "data": "AAAA" })).unwrap();
        assert_eq!(img.mime_type, "image/png");
    }
}
