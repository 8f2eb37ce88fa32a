//! Guest-link form of the access portal.
//!
//! [`GuestLinkFormController`] drives one submission cycle against any
//! [`FormView`]. On `wasm32` the `dom` module binds it to the portal page.

pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod view;

pub use controller::{GuestLinkFormController, SubmissionOutcome, UiError};
pub use view::{
    ElementIds, Field, FormView, MemoryFormView, ProgrammaticSubmit, Region, SubmitTrigger,
};
