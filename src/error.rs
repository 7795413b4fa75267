//! Error types for the SignRequest SDK.
//!
//! Every operation returns `Result<T, SignRequestError>`. Nothing is retried
//! or swallowed: transport, file and decode failures surface as-is, and any
//! response outside `200..=209` becomes [`SignRequestError::Api`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type for SignRequest operations.
pub type Result<T> = std::result::Result<T, SignRequestError>;

/// Message used for API errors that carry no operation-specific context.
pub(crate) const DEFAULT_API_ERROR_MESSAGE: &str = "SignRequest API request failed";

/// Errors that can occur when using the SignRequest SDK.
#[derive(Error, Debug)]
pub enum SignRequestError {
    /// The API answered with a status code that failed the `20x` check.
    #[error("{message} ({status_code}): {body}")]
    Api {
        /// Human-readable context for the failure.
        message: String,
        /// HTTP status code.
        status_code: u16,
        /// Raw response body.
        body: String,
    },

    /// HTTP transport error (DNS, connection, timeout, unreadable body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A file handed to an upload could not be read.
    #[error("Cannot read file {}: {source}", .path.display())]
    FileAccess {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A response body was not the JSON shape the operation expects.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SignRequestError {
    /// Returns the HTTP status code if the API answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SignRequestError::Api { status_code, .. } => Some(*status_code),
            SignRequestError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the raw response body of an API error.
    pub fn body(&self) -> Option<&str> {
        match self {
            SignRequestError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if the token was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            SignRequestError::Api {
                status_code: 401 | 403,
                ..
            }
        )
    }
}
