//! HTML escaping applied before text reaches the transformer.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` so the text is safe inside markup and
/// quoted attributes alike.
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use scrawl_core::escape_html;
///
/// assert_eq!(escape_html("fish & chips"), "fish &amp; chips");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
