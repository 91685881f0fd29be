use thiserror::Error;

/// API-specific errors for fillout-api
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected at construction time, before any request was sent
    #[error(transparent)]
    Config(#[from] fillout_core::CoreError),

    /// The service answered with a non-success status. `message` is the
    /// service's own message when it sent one.
    #[error("{message}")]
    Request { status: u16, message: String },

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_config(&self) -> bool {
        matches!(self, ApiError::Config(_))
    }

    pub fn is_request_failure(&self) -> bool {
        matches!(self, ApiError::Request { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// HTTP status of a failed request
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
