use crate::models::blocks::{BlockRole, ContentBlock, ContentPart, InlineData};
use crate::models::transcript::{ImageData, Message, MessageContent, Role};

/// Model identifier that selects the multimodal branch of
/// [`to_content_blocks`].
pub const MULTIMODAL_MODEL: &str = "gemini-pro-vision";

/// 1x1 transparent PNG, base64-encoded. Substituted when the multimodal
/// branch finds no inline image in the transcript (the provider rejects a
/// multimodal call with no image part).
pub const PNG_PIXEL: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Flags controlling [`to_turn_markup`] output framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnMarkupOptions {
    /// Prepend `"\n\nHuman: "` to the rendered turns.
    pub add_leading_marker: bool,
    /// Append `"\n\nAssistant: "` as an open cue for the next completion.
    pub add_trailing_marker: bool,
    /// Pull contiguous leading unnamed system messages out of the transcript
    /// and emit them as a preamble ahead of everything else.
    pub extract_system_preamble: bool,
}

/// Render a transcript as a flat continuation prompt with alternating
/// Human/Assistant turn markers.
///
/// The markup grammar has no field for speaker names, so every non-system
/// name is folded into its message as a `"<name>: "` prefix before
/// rendering. The transcript is taken by value: folding consumes it.
///
/// Connector rules:
/// - assistant -> `"\n\nAssistant: "`, user -> `"\n\nHuman: "`
/// - system messages named `example_user` / `example_assistant` become the
///   short example connectors `"\n\nH: "` / `"\n\nA: "`
/// - other system messages get a bare `"\n\n"` separator
/// - unrecognized roles get no connector at all
///
/// With `extract_system_preamble` set, leading unnamed system messages are
/// concatenated into a preamble that lands ahead of the leading marker. The
/// scan never inspects the last message, and the scanned prefix is only
/// removed from the turn body when a non-qualifying message is found inside
/// the scanned range.
pub fn to_turn_markup(mut messages: Vec<Message>, opts: &TurnMarkupOptions) -> String {
    for message in &mut messages {
        if message.role != Role::System {
            if let Some(name) = message.name.take() {
                message.content.fold_speaker(&name);
            }
        }
    }

    let mut preamble = String::new();
    if opts.extract_system_preamble {
        let mut boundary = None;
        let scan_end = messages.len().saturating_sub(1);
        for (i, message) in messages.iter().enumerate().take(scan_end) {
            if message.role == Role::System && message.name.is_none() {
                preamble.push_str(message.content.as_text());
                preamble.push_str("\n\n");
            } else {
                boundary = Some(i);
                break;
            }
        }
        // No boundary inside the scanned range means nothing is drained; the
        // scanned content then appears both in the preamble and in the body,
        // matching the original converter.
        if let Some(i) = boundary {
            messages.drain(..i);
        }
        tracing::debug!(
            preamble_len = preamble.len(),
            remaining_turns = messages.len(),
            "extracted system preamble"
        );
    }

    let mut prompt = String::new();
    for message in &messages {
        let connector = match (&message.role, message.name.as_deref()) {
            (Role::Assistant, _) => "\n\nAssistant: ",
            (Role::User, _) => "\n\nHuman: ",
            (Role::System, Some("example_assistant")) => "\n\nA: ",
            (Role::System, Some("example_user")) => "\n\nH: ",
            (Role::System, _) => "\n\n",
            (Role::Other(_), _) => "",
        };
        prompt.push_str(connector);
        prompt.push_str(message.content.as_text());
    }

    if opts.add_leading_marker {
        prompt.insert_str(0, "\n\nHuman: ");
    }
    if opts.add_trailing_marker {
        prompt.push_str("\n\nAssistant: ");
    }
    // Applied last so the preamble ends up ahead of the leading marker.
    if opts.extract_system_preamble {
        prompt.insert_str(0, &preamble);
    }

    prompt
}

/// Render a transcript as the provider's array-of-content-blocks shape.
///
/// Mapping highlights:
/// - Text models: assistant maps to the `model` role, everything else to
///   `user`, and consecutive same-role messages coalesce into one block with
///   a blank-line separator (the provider enforces strict role alternation).
/// - The multimodal model takes a single combined `user` turn: all messages
///   are flattened into one `USER:`/`MODEL:`-labeled text part plus the first
///   inline image found in the transcript (or [`PNG_PIXEL`] when there is
///   none).
pub fn to_content_blocks(messages: &[Message], model: &str) -> Vec<ContentBlock> {
    if model == MULTIMODAL_MODEL {
        return vec![multimodal_block(messages)];
    }

    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut last_role = BlockRole::User;

    for (i, message) in messages.iter().enumerate() {
        let role = match message.role {
            Role::Assistant => BlockRole::Model,
            _ => BlockRole::User,
        };
        if i > 0 && role == last_role {
            current.push_str("\n\n");
            current.push_str(message.content.as_text());
        } else {
            if !current.is_empty() {
                blocks.push(ContentBlock::text(current.trim(), last_role));
            }
            current = message.content.as_text().to_string();
            last_role = role;
        }
        if i + 1 == messages.len() {
            blocks.push(ContentBlock::text(current.trim(), last_role));
        }
    }

    blocks
}

fn multimodal_block(messages: &[Message]) -> ContentBlock {
    let combined_text = messages
        .iter()
        .map(|message| {
            let label = match message.role {
                Role::Assistant => "MODEL: ",
                _ => "USER: ",
            };
            format!("{label}{}", message.content.as_text())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string();

    let data = messages
        .iter()
        .find_map(|message| message.content.image())
        .map(|image| image.data.clone())
        .unwrap_or_else(|| {
            tracing::debug!("no inline image in transcript; using placeholder pixel");
            PNG_PIXEL.to_string()
        });

    ContentBlock {
        parts: vec![
            ContentPart::Text {
                text: combined_text,
            },
            ContentPart::Inline {
                inline_data: InlineData {
                    mime_type: "image/png".to_string(),
                    data,
                },
            },
        ],
        role: BlockRole::User,
    }
}

/// Input accepted by [`to_labeled_lines`]: either a transcript to format or
/// text some earlier stage already rendered.
#[derive(Debug, Clone)]
pub enum LabeledLinesInput {
    Rendered(String),
    Transcript(Vec<Message>),
}

impl From<String> for LabeledLinesInput {
    fn from(s: String) -> Self {
        LabeledLinesInput::Rendered(s)
    }
}

impl From<&str> for LabeledLinesInput {
    fn from(s: &str) -> Self {
        LabeledLinesInput::Rendered(s.to_string())
    }
}

impl From<Vec<Message>> for LabeledLinesInput {
    fn from(messages: Vec<Message>) -> Self {
        LabeledLinesInput::Transcript(messages)
    }
}

/// Render a transcript as a newline-joined, role-labeled plain-text prompt
/// terminated by an open `"\nassistant:"` cue.
///
/// Label rules:
/// - unnamed system messages are labeled `System`
/// - a system message's name overrides the `System` label verbatim
/// - every other message is labeled with its role string as-is
///
/// Pre-rendered string input is returned unchanged.
pub fn to_labeled_lines(input: impl Into<LabeledLinesInput>) -> String {
    let messages = match input.into() {
        LabeledLinesInput::Rendered(s) => return s,
        LabeledLinesInput::Transcript(messages) => messages,
    };

    let lines = messages
        .iter()
        .map(|message| {
            let label = match (&message.role, message.name.as_deref()) {
                (Role::System, None) => "System",
                (Role::System, Some(name)) => name,
                (role, _) => role.as_str(),
            };
            format!("{label}: {}", message.content.as_text())
        })
        .collect::<Vec<_>>();

    format!("{}\nassistant:", lines.join("\n"))
}

/// Build a transcript from a loosely-shaped JSON message array.
///
/// Permissive by design: unknown roles are carried through as-is, missing
/// content becomes empty text, and a parts array is scanned for a text part
/// and an `image_url` part instead of being trusted positionally. Non-array
/// input yields an empty transcript.
pub fn json_to_messages(v: &serde_json::Value) -> Vec<Message> {
    let arr = match v.as_array() {
        Some(arr) => arr,
        None => return Vec::new(),
    };

    arr.iter()
        .map(|m| {
            let role = m
                .get("role")
                .and_then(|r| r.as_str())
                .map(Role::from)
                .unwrap_or(Role::User);
            let name = m
                .get("name")
                .and_then(|n| n.as_str())
                .map(|s| s.to_string());
            let content = match m.get("content") {
                Some(serde_json::Value::String(s)) => MessageContent::Text(s.clone()),
                Some(serde_json::Value::Array(parts)) => {
                    MessageContent::Multimodal(crate::models::transcript::MultimodalContent {
                        text: parts
                            .iter()
                            .find_map(|p| p.get("text").and_then(|t| t.as_str()))
                            .unwrap_or_default()
                            .to_string(),
                        image: parts
                            .iter()
                            .find_map(|p| p.get("image_url"))
                            .map(|image| ImageData {
                                mime_type: image
                                    .get("mime_type")
                                    .and_then(|t| t.as_str())
                                    .unwrap_or("image/png")
                                    .to_string(),
                                data: image
                                    .get("data")
                                    .and_then(|d| d.as_str())
                                    .unwrap_or_default()
                                    .to_string(),
                            }),
                    })
                }
                _ => MessageContent::Text(String::new()),
            };
            Message {
                role,
                name,
                content,
            }
        })
        .collect()
}
