//! Error types for the concierge endpoints.

use thiserror::Error;

/// Failure of a call to one of the concierge endpoints.
///
/// The widget never shows these to the guest; they are logged and collapsed
/// into a single fallback message (chat) or an empty panel (hotel info).
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connection refused, reset, aborted).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// 2xx response whose body is not the expected JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },
}

impl Error {
    /// Short, stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "transport",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Json(_) => "malformed_body",
            Self::Api { .. } => "status",
        }
    }
}

/// Result type alias for endpoint operations.
pub type Result<T> = std::result::Result<T, Error>;
