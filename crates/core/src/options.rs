//! Classification thresholds shared by the transformer and its bindings.

use serde::{Deserialize, Serialize};

/// Single-line paragraphs shorter than this many characters become titles.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 80;

/// Colon-terminated lines shorter than this many characters become section titles.
pub const DEFAULT_SECTION_TITLE_MAX_CHARS: usize = 60;

/// Options controlling how paragraphs and lines are classified.
///
/// Deserializes from snake_case or camelCase keys; any key left out keeps
/// its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Exclusive upper bound (in chars, after trimming) for title paragraphs.
    #[serde(alias = "titleMaxChars")]
    pub title_max_chars: usize,
    /// Exclusive upper bound for section titles. `None` accepts any length.
    #[serde(alias = "sectionTitleMaxChars")]
    pub section_title_max_chars: Option<usize>,
    /// Pass character entity references such as `&amp;` through untouched
    /// instead of tagging the letters inside them.
    #[serde(alias = "keepEntities")]
    pub keep_entities: bool,
}

impl TransformOptions {
    /// Options with a custom title threshold.
    pub fn with_title_max_chars(mut self, max: usize) -> Self {
        self.title_max_chars = max;
        self
    }

    /// Options with a custom (or disabled) section-title threshold.
    pub fn with_section_title_max_chars(mut self, max: Option<usize>) -> Self {
        self.section_title_max_chars = max;
        self
    }

    /// Options that keep entity references intact.
    pub fn with_keep_entities(mut self, keep: bool) -> Self {
        self.keep_entities = keep;
        self
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            section_title_max_chars: Some(DEFAULT_SECTION_TITLE_MAX_CHARS),
            keep_entities: false,
        }
    }
}
