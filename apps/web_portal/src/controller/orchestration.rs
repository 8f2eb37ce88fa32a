//! One guest-link submission cycle, from the submit event to re-enabling the form.

use client_core::GuestLinkApi;
use shared::protocol::GuestLinkRequest;
use tracing::{debug, error, info};

use crate::controller::events::{SubmissionOutcome, UiError};
use crate::view::{Field, FormView, Region, SubmitTrigger};

pub struct GuestLinkFormController<V, A> {
    view: V,
    api: A,
}

impl<V: FormView, A: GuestLinkApi> GuestLinkFormController<V, A> {
    pub fn new(view: V, api: A) -> Self {
        Self { view, api }
    }

    /// Runs a full submission cycle for `trigger`.
    pub async fn handle_submit(&self, trigger: &impl SubmitTrigger) -> SubmissionOutcome {
        self.begin_submit(trigger).complete().await
    }

    /// Synchronous half of a submission: everything that must happen while the
    /// submit event is still being dispatched.
    ///
    /// Reads both fields, disables the submit control and hides the regions left
    /// over from the previous cycle. The control is re-enabled when the returned
    /// [`Submission`] is completed or dropped.
    pub fn begin_submit(&self, trigger: &impl SubmitTrigger) -> Submission<'_, V, A> {
        trigger.prevent_default();

        let request = GuestLinkRequest::from_fields(
            self.view.field_value(Field::Url),
            &self.view.field_value(Field::ExpirationDays),
        );

        let in_flight = SubmitInFlight::disable(&self.view);
        self.view.hide(Region::OutputContainer);
        self.view.hide(Region::Error);
        debug!(expiration = %request.expiration, "guest link submission started");

        Submission {
            controller: self,
            request,
            _in_flight: in_flight,
        }
    }
}

/// A submission whose request has not been sent yet.
#[must_use = "dropping a submission re-enables the form without sending the request"]
pub struct Submission<'a, V: FormView, A> {
    controller: &'a GuestLinkFormController<V, A>,
    request: GuestLinkRequest,
    _in_flight: SubmitInFlight<'a, V>,
}

impl<'a, V: FormView, A: GuestLinkApi> Submission<'a, V, A> {
    pub fn request(&self) -> &GuestLinkRequest {
        &self.request
    }

    /// Sends the request and renders its outcome.
    pub async fn complete(self) -> SubmissionOutcome {
        let GuestLinkFormController { view, api } = self.controller;

        match api.create_guest_link(&self.request).await {
            Ok(response) => {
                view.show(Region::OutputContainer);
                view.set_output_text(&response.url);
                info!(guest_link = %response.url, "guest link created");
                SubmissionOutcome::Success(response)
            }
            Err(err) => {
                view.show(Region::Error);
                error!(
                    category = ?err.category(),
                    error = %err,
                    "guest link submission failed"
                );
                SubmissionOutcome::Failure(UiError::from(&err))
            }
        }
    }
}

/// Keeps the submit control disabled while alive.
struct SubmitInFlight<'a, V: FormView>(&'a V);

impl<'a, V: FormView> SubmitInFlight<'a, V> {
    fn disable(view: &'a V) -> Self {
        view.set_submit_enabled(false);
        Self(view)
    }
}

impl<V: FormView> Drop for SubmitInFlight<'_, V> {
    fn drop(&mut self) {
        self.0.set_submit_enabled(true);
        debug!("guest link submission finished");
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
