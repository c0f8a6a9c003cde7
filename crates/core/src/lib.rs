#![deny(missing_docs)]
//! Scrawl core: turns plain text into handwriting-style markup, plus the
//! request boundary (validation, escaping, error messages) around it.

/// Paragraph and line classification.
pub mod blocks;
/// Boundary error type and user-facing messages.
pub mod error;
/// HTML escaping helpers.
pub mod escape;
/// Classification thresholds.
pub mod options;
/// Request/response types and handlers.
pub mod request;
/// Per-character class tagging.
pub mod tagging;
/// The text-to-markup transformer.
pub mod transform;

pub use blocks::{
    BULLET_MARKERS, Block, BlockKind, Paragraph, classify_line, is_title, is_trim_space,
    split_blocks, trim_text, wrap_block,
};
pub use error::{EMPTY_TEXT_MESSAGE, ScrawlError, TRANSFORM_FAILED_MESSAGE};
pub use escape::escape_html;
pub use options::{DEFAULT_SECTION_TITLE_MAX_CHARS, DEFAULT_TITLE_MAX_CHARS, TransformOptions};
pub use request::{
    ErrorResponse, TransformRequest, TransformResponse, handle_transform, handle_transform_json,
    render_print,
};
pub use tagging::{
    CHAR_CLASSES, is_tagged_char, tag_characters, tag_characters_with, tagged_count,
};
pub use transform::{render_paragraphs, transform, transform_with_options};
