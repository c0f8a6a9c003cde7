use thiserror::Error;

/// Message shown to users when a request carries no usable text.
pub const EMPTY_TEXT_MESSAGE: &str = "No text provided";

/// Message shown to users for every failure other than missing text.
pub const TRANSFORM_FAILED_MESSAGE: &str = "Failed to transform text";

/// Errors surfaced by the request boundary.
///
/// The transformer itself never fails; these cover validating and decoding
/// what a caller hands to it.
#[derive(Debug, Error)]
pub enum ScrawlError {
    /// The request text was missing content after trimming.
    #[error("no text provided")]
    EmptyText,
    /// The request body could not be decoded into a `TransformRequest`.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

impl ScrawlError {
    /// HTTP status an embedding server should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyText | Self::InvalidRequest(_) => 400,
        }
    }

    /// Message safe to show to end users.
    ///
    /// Only the empty-text case is specific; decoder details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyText => EMPTY_TEXT_MESSAGE,
            Self::InvalidRequest(_) => TRANSFORM_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_a_client_error() {
        let err = ScrawlError::EmptyText;
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.user_message(), "No text provided");
    }

    #[test]
    fn decode_errors_hide_their_detail() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ScrawlError::from(decode);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.user_message(), "Failed to transform text");
        assert!(err.to_string().starts_with("invalid request:"));
    }
}
