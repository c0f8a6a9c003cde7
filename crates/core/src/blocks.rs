//! Paragraph and line classification.
//!
//! Text is cut into paragraphs on blank-line pairs (`\n\n`), and paragraphs
//! into lines on `\n`. A short single-line paragraph is a title; otherwise
//! each line is classified on its own as a section title, a bullet, or plain
//! text.

use crate::options::TransformOptions;
use crate::tagging::tag_characters_with;

/// Characters that mark a line as a bullet item.
pub const BULLET_MARKERS: [char; 3] = ['•', '-', '*'];

/// Structural role of a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Short standalone paragraph.
    Title,
    /// Line ending in a colon.
    SectionTitle,
    /// Line starting with a bullet marker (marker removed from the content).
    Bullet,
    /// Anything else; rendered without a wrapper.
    Plain,
}

impl BlockKind {
    /// CSS class of the wrapping span, if the kind has one.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            BlockKind::Title => Some("title"),
            BlockKind::SectionTitle => Some("section-title"),
            BlockKind::Bullet => Some("bullet"),
            BlockKind::Plain => None,
        }
    }
}

/// A classified piece of text, borrowing its content from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Structural role.
    pub kind: BlockKind,
    /// Trimmed text to tag (bullet markers already stripped).
    pub content: &'a str,
}

impl<'a> Block<'a> {
    /// Creates a block.
    pub fn new(kind: BlockKind, content: &'a str) -> Self {
        Self { kind, content }
    }

    /// Renders the block as tagged, optionally wrapped, markup.
    pub fn render(&self, options: &TransformOptions) -> String {
        wrap_block(self.kind, &tag_characters_with(self.content, options.keep_entities))
    }
}

/// One paragraph's blocks, in source order.
pub type Paragraph<'a> = Vec<Block<'a>>;

/// Whether `paragraph` (untrimmed) should be rendered as a title.
///
/// Only paragraphs without any line break qualify, so a multi-line
/// paragraph is never a title however short it is.
pub fn is_title(paragraph: &str, options: &TransformOptions) -> bool {
    !paragraph.contains('\n') && char_len(trim_text(paragraph)) < options.title_max_chars
}

/// Classifies a single line of a multi-line paragraph.
///
/// Returns the kind and the trimmed content to tag. Section titles win over
/// bullets, so `- Notes:` is a section title with its dash kept.
pub fn classify_line<'a>(line: &'a str, options: &TransformOptions) -> Block<'a> {
    let line = trim_text(line);

    let short_enough = options
        .section_title_max_chars
        .is_none_or(|max| char_len(line) < max);
    if line.ends_with(':') && short_enough {
        return Block::new(BlockKind::SectionTitle, line);
    }

    if let Some(rest) = line.strip_prefix(&BULLET_MARKERS[..]) {
        return Block::new(BlockKind::Bullet, trim_text(rest));
    }

    Block::new(BlockKind::Plain, line)
}

/// Splits `text` into classified paragraphs, dropping blank paragraphs and
/// blank lines.
pub fn split_blocks<'a>(text: &'a str, options: &TransformOptions) -> Vec<Paragraph<'a>> {
    text.split("\n\n")
        .filter(|paragraph| !trim_text(paragraph).is_empty())
        .map(|paragraph| {
            if is_title(paragraph, options) {
                return vec![Block::new(BlockKind::Title, trim_text(paragraph))];
            }
            paragraph
                .split('\n')
                .filter(|line| !trim_text(line).is_empty())
                .map(|line| classify_line(line, options))
                .collect()
        })
        .collect()
}

/// Wraps already-tagged markup in the span for `kind`.
pub fn wrap_block(kind: BlockKind, tagged: &str) -> String {
    match kind.class_name() {
        Some(class) => format!("<span class=\"{class}\">{tagged}</span>"),
        None => tagged.to_string(),
    }
}

/// Whitespace removed when trimming paragraphs, lines and request text:
/// Unicode `White_Space` plus the ASCII separators U+001C..=U+001F.
pub fn is_trim_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Trims [`is_trim_space`] characters from both ends.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(is_trim_space)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
