use serde::{Deserialize, Serialize};

/// Role tag on an emitted content block.
///
/// The block grammar only knows two speakers: the model and everyone else.
/// Serialized lowercase to match the wire format ("user" | "model").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockRole {
    User,
    Model,
}

/// Inline image payload inside a content part.
///
/// Wire keys are camelCase (`mimeType`, `data`), matching the provider's
/// JSON schema for inline data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// One part of a content block: plain text or an inline image.
///
/// Untagged so each variant serializes as its bare field map:
/// `{ "text": ... }` or `{ "inlineData": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// A role-tagged block in the provider's array-of-contents request shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub parts: Vec<ContentPart>,
    pub role: BlockRole,
}

impl ContentBlock {
    /// Block holding a single text part.
    pub fn text(text: impl Into<String>, role: BlockRole) -> Self {
        Self {
            parts: vec![ContentPart::Text { text: text.into() }],
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_shape() {
        let block = ContentBlock {
            parts: vec![
                ContentPart::Text {
                    text: "USER: hi".into(),
                },
                ContentPart::Inline {
                    inline_data: InlineData {
                        mime_type: "image/png".into(),
                        data: "AAAA".into(),
                    },
                },
            ],
            role: BlockRole::User,
        };

        let v = serde_json::to_value(&block).unwrap();
        assert_eq!(
            v,
            json!({
                "parts": [
                    { "text": "USER: hi" },
                    { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                ],
                "role": "user"
            })
        );
    }

    #[test]
    fn model_role_serializes_lowercase() {
        let block = ContentBlock::text("MODEL: hello", BlockRole::Model);
        let v = serde_json::to_value(&block).unwrap();
        assert_eq!(v.get("role").and_then(|r| r.as_str()), Some("model"));
    }
}
