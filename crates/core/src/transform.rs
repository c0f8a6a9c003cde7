//! Text-to-markup transformation.

use crate::blocks::{Block, Paragraph, split_blocks};
use crate::options::TransformOptions;

/// Transforms escaped text into handwriting markup with default options.
///
/// The input must already be HTML-escaped; it is treated literally. Blank
/// input yields an empty string.
///
/// # Examples
///
/// ```
/// use scrawl_core::transform;
///
/// assert_eq!(transform(" \n\n "), "");
/// assert_eq!(
///     transform("Hi"),
///     "<span class=\"title\"><span class=\"char-1\">H</span><span class=\"char-2\">i</span></span>"
/// );
/// ```
pub fn transform(text: &str) -> String {
    transform_with_options(text, &TransformOptions::default())
}

/// Transforms escaped text into handwriting markup.
///
/// Paragraph outputs are joined with `\n\n` and line outputs with `\n`.
pub fn transform_with_options(text: &str, options: &TransformOptions) -> String {
    render_paragraphs(&split_blocks(text, options), options)
}

/// Renders paragraphs produced by [`split_blocks`].
pub fn render_paragraphs(paragraphs: &[Paragraph<'_>], options: &TransformOptions) -> String {
    paragraphs
        .iter()
        .map(|blocks| render_paragraph(blocks, options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_paragraph(blocks: &[Block<'_>], options: &TransformOptions) -> String {
    blocks
        .iter()
        .map(|block| block.render(options))
        .collect::<Vec<_>>()
        .join("\n")
}
