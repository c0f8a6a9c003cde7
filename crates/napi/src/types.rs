//! NAPI-exposed data structures.

use napi_derive::napi;

/// Options accepted by every transform entry point.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct TransformConfig {
    /// Single-line paragraphs shorter than this become titles (default 80).
    pub title_max_chars: Option<u32>,
    /// Colon-terminated lines shorter than this become section titles (default 60).
    pub section_title_max_chars: Option<u32>,
    /// Treat every colon-terminated line as a section title regardless of length.
    pub disable_section_title_limit: Option<bool>,
    /// Pass entity references such as `&amp;` through without tagging their letters.
    pub keep_entities: Option<bool>,
}

/// Result of a validated transform request.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    /// Escaped, tagged markup ready to embed in a page.
    pub formatted_text: String,
}

impl From<scrawl_core::TransformResponse> for TransformResult {
    fn from(response: scrawl_core::TransformResponse) -> Self {
        Self {
            formatted_text: response.formatted_text,
        }
    }
}
