//! Data models for the transcript converters.
//!
//! This module groups two submodules:
//! - `transcript`: The canonical provider-agnostic chat transcript — role-tagged
//!   messages with optional speaker names and string-or-multimodal content.
//! - `blocks`: The structured content-block output shape used by providers that
//!   accept transcripts as arrays rather than flattened strings.
//!
//! The conversion logic that renders a `Vec<transcript::Message>` into each
//! provider payload is implemented in `crate::conversion`.

pub mod blocks;
pub mod transcript;

// Optional convenience re-exports for downstream users.
// These allow importing commonly-used types directly from `chat2prompt::models::*`.
pub use blocks::{BlockRole, ContentBlock, ContentPart, InlineData};
pub use transcript::{ImageData, Message, MessageContent, MultimodalContent, Role};
