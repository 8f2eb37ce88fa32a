use reqwest::StatusCode;
use thiserror::Error;

/// How a failed submission is reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request never produced a usable HTTP response.
    Transport,
    /// The server answered, but not with a guest link.
    Application,
}

#[derive(Debug, Error)]
pub enum GuestLinkError {
    #[error("guest link request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("guest link request rejected with status {status}")]
    Status { status: StatusCode },
    #[error("guest link response body could not be read: {0}")]
    Body(#[source] reqwest::Error),
    #[error("malformed guest link response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GuestLinkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) | Self::Body(_) => ErrorCategory::Transport,
            Self::Status { .. } | Self::Decode(_) => ErrorCategory::Application,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
