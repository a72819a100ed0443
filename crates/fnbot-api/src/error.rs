use fnbot_core::{Failure, FailureKind};
use thiserror::Error;

/// Errors returned by the upstream client and response parser.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// Collapses the error into the serializable value handed to callers of
    /// the command surface.
    #[must_use]
    pub fn failure(&self) -> Failure {
        let kind = match self {
            ApiError::Http(_) | ApiError::UnexpectedStatus { .. } | ApiError::InvalidBaseUrl { .. } => {
                FailureKind::Transport
            }
            ApiError::NotFound { .. } => FailureKind::NotFound,
            ApiError::Deserialize { .. } => FailureKind::Parse,
        };
        Failure::new(kind, self.to_string())
    }
}
