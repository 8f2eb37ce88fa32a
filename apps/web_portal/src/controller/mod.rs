//! Controller layer: submission cycle orchestration and the outcomes it reports.

pub mod events;
pub mod orchestration;

pub use events::{SubmissionOutcome, UiError};
pub use orchestration::{GuestLinkFormController, Submission};
