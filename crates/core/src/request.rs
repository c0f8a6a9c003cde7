//! Request boundary: validation, escaping and error translation around the
//! transformer.

use serde::{Deserialize, Serialize};

use crate::blocks::{BlockKind, split_blocks, trim_text};
use crate::error::ScrawlError;
use crate::escape::escape_html;
use crate::options::TransformOptions;
use crate::tagging::tagged_count;
use crate::transform::{render_paragraphs, transform_with_options};

/// Body of a transform request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    /// Raw, unescaped user text. A missing key reads as empty text.
    #[serde(default)]
    pub text: String,
}

impl TransformRequest {
    /// Creates a request for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decodes a JSON request body. `text`, when present, must be a string.
    pub fn from_json(body: &str) -> Result<Self, ScrawlError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Successful transform result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResponse {
    /// Escaped, tagged markup.
    pub formatted_text: String,
}

/// Error body returned to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing message.
    pub error: String,
}

impl From<&ScrawlError> for ErrorResponse {
    fn from(err: &ScrawlError) -> Self {
        Self {
            error: err.user_message().to_string(),
        }
    }
}

/// Validates, escapes and transforms a request.
///
/// The text is trimmed first; nothing left means [`ScrawlError::EmptyText`].
pub fn handle_transform(
    request: &TransformRequest,
    options: &TransformOptions,
) -> Result<TransformResponse, ScrawlError> {
    let text = trim_text(&request.text);
    if text.is_empty() {
        log::warn!("rejecting transform request without text");
        return Err(ScrawlError::EmptyText);
    }

    let escaped = escape_html(text);
    let paragraphs = split_blocks(&escaped, options);
    if log::log_enabled!(log::Level::Debug) {
        let mut counts = [0usize; 4];
        for block in paragraphs.iter().flatten() {
            counts[kind_slot(block.kind)] += 1;
        }
        log::debug!(
            "transforming {} chars ({} tagged): {} paragraphs ({} titles, {} section titles, {} bullets, {} plain lines)",
            text.chars().count(),
            tagged_count(&escaped),
            paragraphs.len(),
            counts[0],
            counts[1],
            counts[2],
            counts[3],
        );
    }

    Ok(TransformResponse {
        formatted_text: render_paragraphs(&paragraphs, options),
    })
}

/// Decodes a JSON body and handles it, logging any failure.
pub fn handle_transform_json(
    body: &str,
    options: &TransformOptions,
) -> Result<TransformResponse, ScrawlError> {
    let request = TransformRequest::from_json(body).inspect_err(|err| {
        log::warn!("rejecting malformed transform request: {err}");
    })?;
    handle_transform(&request, options)
}

/// Body of the print view: escapes and transforms `text` without trimming
/// or validation. Empty input renders as an empty string.
pub fn render_print(text: &str, options: &TransformOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    transform_with_options(&escape_html(text), options)
}

fn kind_slot(kind: BlockKind) -> usize {
    match kind {
        BlockKind::Title => 0,
        BlockKind::SectionTitle => 1,
        BlockKind::Bullet => 2,
        BlockKind::Plain => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::tag_characters;

    fn opts() -> TransformOptions {
        TransformOptions::default()
    }

    #[test]
    fn blank_text_is_rejected() {
        for text in ["", "   ", "\n\n\t"] {
            let err = handle_transform(&TransformRequest::new(text), &opts()).unwrap_err();
            assert!(matches!(err, ScrawlError::EmptyText));
            assert_eq!(ErrorResponse::from(&err).error, "No text provided");
        }
    }

    #[test]
    fn separator_controls_alone_are_empty_text() {
        let request = TransformRequest::new("\u{1f}\n\u{1c}");
        let err = handle_transform(&request, &opts()).unwrap_err();
        assert!(matches!(err, ScrawlError::EmptyText));
    }

    #[test]
    fn text_is_trimmed_and_escaped_before_tagging() {
        let response = handle_transform(&TransformRequest::new("  <b>  "), &opts()).unwrap();
        assert_eq!(
            response.formatted_text,
            format!("<span class=\"title\">{}</span>", tag_characters("&lt;b&gt;"))
        );
        assert!(!response.formatted_text.contains("<b>"));
    }

    #[test]
    fn keep_entities_leaves_escapes_intact() {
        let options = opts().with_keep_entities(true);
        let response = handle_transform(&TransformRequest::new("a<b"), &options).unwrap();
        assert_eq!(
            response.formatted_text,
            "<span class=\"title\"><span class=\"char-1\">a</span>&lt;<span class=\"char-2\">b</span></span>"
        );
    }

    #[test]
    fn json_body_round_trip() {
        let response =
            handle_transform_json(r#"{"text": "Note:\nFirst"}"#, &opts()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["formatted_text"].as_str().unwrap().contains("section-title"));
    }

    #[test]
    fn json_body_without_text_is_empty_text() {
        for body in ["{}", r#"{"other": "x"}"#, r#"{"text": "  "}"#] {
            let err = handle_transform_json(body, &opts()).unwrap_err();
            assert!(matches!(err, ScrawlError::EmptyText), "body {body}");
            assert_eq!(err.status_code(), 400);
            assert_eq!(ErrorResponse::from(&err).error, "No text provided");
        }
    }

    #[test]
    fn json_body_must_be_well_formed() {
        for body in [r#"{"text": 3}"#, r#"{"text": null}"#, "not json", "null"] {
            let err = handle_transform_json(body, &opts()).unwrap_err();
            assert!(matches!(err, ScrawlError::InvalidRequest(_)), "body {body}");
            assert_eq!(err.status_code(), 400);
            assert_eq!(ErrorResponse::from(&err).error, "Failed to transform text");
        }
    }

    #[test]
    fn non_blank_text_always_produces_markup() {
        for text in ["x", "...", "\n\n-\n\n", "a\n\n\nb"] {
            let response = handle_transform(&TransformRequest::new(text), &opts()).unwrap();
            assert!(!response.formatted_text.is_empty(), "text {text:?}");
        }
    }

    #[test]
    fn print_view_does_not_validate() {
        assert_eq!(render_print("", &opts()), "");
        assert_eq!(render_print("   ", &opts()), "");
        assert_eq!(
            render_print("x & y", &opts()),
            format!("<span class=\"title\">{}</span>", tag_characters("x &amp; y"))
        );
    }
}
