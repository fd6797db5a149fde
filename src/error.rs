//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// The HTTP status code, if the server answered with an error status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Config(_) => None,
        }
    }
}

/// Request pipeline errors.
///
/// Each variant is a distinct failure stage; nothing is retried.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// No response was obtained, or its body could not be read.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server responded with status >= 400. `body` is the raw text.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// A success body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn is_transport_error(&self) -> bool {
        #[cfg(feature = "http")]
        {
            matches!(self, Self::Transport(_))
        }
        #[cfg(not(feature = "http"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_contains_status_and_body() {
        let err = HttpError::Api {
            status: 400,
            body: r#"{"error":"Bad request"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains(r#"{"error":"Bad request"}"#));
        assert_eq!(err.status(), Some(400));
        assert!(err.is_api_error());
        assert!(!err.is_transport_error());
    }

    #[test]
    fn test_sdk_error_wraps_http_error() {
        let err: SdkError = HttpError::Api {
            status: 404,
            body: "not found".to_string(),
        }
        .into();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("API error 404: not found"));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = HttpError::Decode(source);
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Failed to decode response"));
    }
}
