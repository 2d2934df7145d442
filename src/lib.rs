#![forbid(unsafe_code)]
#![doc = r#"
Chat2Prompt

Convert a provider-agnostic chat transcript into the literal prompt payload
each downstream LLM API expects.

Crate highlights
- Pure conversion: three stateless functions, one per provider grammar.
- `to_turn_markup`: flat continuation prompt with Human/Assistant turn markers
  and optional system-preamble extraction.
- `to_content_blocks`: role-tagged content-block array with same-role
  coalescing, plus a combined single-turn path for the multimodal model.
- `to_labeled_lines`: newline-joined `role: content` transcript ending in an
  open `assistant:` cue.

Modules
- `models`: Data structures for the canonical transcript and the block output.
- `conversion`: The converters and the permissive JSON ingestion helper.

Note: The turn connectors ("Human:", "Assistant:", "A:", "H:") are fixed
protocol literals, not configurable text. Request dispatch, HTTP, and auth
live in the calling layer; this crate is a library boundary only.
"#]

pub mod conversion;
pub mod models;

// Re-export the primary conversion functions for ergonomic library use.
pub use crate::conversion::{
    json_to_messages, to_content_blocks, to_labeled_lines, to_turn_markup, LabeledLinesInput,
    TurnMarkupOptions, MULTIMODAL_MODEL, PNG_PIXEL,
};

// Re-export model namespaces for convenience (downstream users can do `use chat2prompt::transcript`).
pub use crate::models::{blocks, transcript};
