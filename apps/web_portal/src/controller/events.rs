//! Outcomes of a submission cycle and their user-facing error model.

use client_core::{ErrorCategory, GuestLinkError};
use shared::protocol::GuestLinkResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(GuestLinkResponse),
    Failure(UiError),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn guest_link(&self) -> Option<&str> {
        match self {
            Self::Success(response) => Some(&response.url),
            Self::Failure(_) => None,
        }
    }
}

/// A failed submission as the page sees it.
///
/// The page only shows that something went wrong. `message` carries the detail
/// for the diagnostic log and is never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: ErrorCategory,
    message: String,
}

impl UiError {
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&GuestLinkError> for UiError {
    fn from(err: &GuestLinkError) -> Self {
        Self {
            category: err.category(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_category_and_detail_of_client_error() {
        let err = GuestLinkError::Status {
            status: client_core::StatusCode::BAD_REQUEST,
        };
        let ui_error = UiError::from(&err);
        assert_eq!(ui_error.category(), ErrorCategory::Application);
        assert!(ui_error.message().contains("400"));
    }

    #[test]
    fn only_success_carries_a_guest_link() {
        let success = SubmissionOutcome::Success(GuestLinkResponse {
            url: "https://host/g/abc123".into(),
        });
        assert!(success.is_success());
        assert_eq!(success.guest_link(), Some("https://host/g/abc123"));

        let failure = SubmissionOutcome::Failure(UiError::from(&GuestLinkError::Status {
            status: client_core::StatusCode::INTERNAL_SERVER_ERROR,
        }));
        assert!(!failure.is_success());
        assert_eq!(failure.guest_link(), None);
    }
}
