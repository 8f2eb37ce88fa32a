//! Capabilities the controller needs from the host page, plus an in-memory page.

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    ExpirationDays,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    OutputContainer,
    Error,
}

/// Element handles of the guest-link form.
///
/// Implementations mutate the page from the UI thread only, so every method
/// takes `&self` the way DOM handles do.
pub trait FormView {
    /// Current value of a field at the moment of the call.
    fn field_value(&self, field: Field) -> String;
    fn set_submit_enabled(&self, enabled: bool);
    fn show(&self, region: Region);
    fn hide(&self, region: Region);
    /// Replaces the output text. The value is plain text, never markup.
    fn set_output_text(&self, text: &str);
}

impl<T: FormView + ?Sized> FormView for &T {
    fn field_value(&self, field: Field) -> String {
        (**self).field_value(field)
    }

    fn set_submit_enabled(&self, enabled: bool) {
        (**self).set_submit_enabled(enabled)
    }

    fn show(&self, region: Region) {
        (**self).show(region)
    }

    fn hide(&self, region: Region) {
        (**self).hide(region)
    }

    fn set_output_text(&self, text: &str) {
        (**self).set_output_text(text)
    }
}

impl<T: FormView + ?Sized> FormView for Arc<T> {
    fn field_value(&self, field: Field) -> String {
        (**self).field_value(field)
    }

    fn set_submit_enabled(&self, enabled: bool) {
        (**self).set_submit_enabled(enabled)
    }

    fn show(&self, region: Region) {
        (**self).show(region)
    }

    fn hide(&self, region: Region) {
        (**self).hide(region)
    }

    fn set_output_text(&self, text: &str) {
        (**self).set_output_text(text)
    }
}

/// The event that started a submission.
pub trait SubmitTrigger {
    /// Stops the browser from navigating to the form action.
    fn prevent_default(&self);
}

/// A submission started from code rather than a form event. Nothing to prevent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgrammaticSubmit;

impl SubmitTrigger for ProgrammaticSubmit {
    fn prevent_default(&self) {}
}

/// Identifiers of the form elements in the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub form: String,
    pub url_input: String,
    pub expiration_input: String,
    pub submit: String,
    pub output_container: String,
    pub output: String,
    pub error: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "guest-form".into(),
            url_input: "guest-url".into(),
            expiration_input: "guest-expiration".into(),
            submit: "guest-submit".into(),
            output_container: "guest-output-container".into(),
            output: "guest-output".into(),
            error: "guest-error".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub url: String,
    pub expiration_days: String,
    pub submit_enabled: bool,
    pub output_container_visible: bool,
    pub error_visible: bool,
    pub output_text: String,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            url: String::new(),
            expiration_days: String::new(),
            submit_enabled: true,
            output_container_visible: false,
            error_visible: false,
            output_text: String::new(),
        }
    }
}

/// Page state kept in memory, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryFormView {
    state: Mutex<FormSnapshot>,
}

impl MemoryFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(url: impl Into<String>, expiration_days: impl Into<String>) -> Self {
        let view = Self::new();
        view.type_into(Field::Url, url);
        view.type_into(Field::ExpirationDays, expiration_days);
        view
    }

    /// Simulates the user editing a field.
    pub fn type_into(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock();
        match field {
            Field::Url => state.url = value.into(),
            Field::ExpirationDays => state.expiration_days = value.into(),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FormSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_region(&self, region: Region, visible: bool) {
        let mut state = self.lock();
        match region {
            Region::OutputContainer => state.output_container_visible = visible,
            Region::Error => state.error_visible = visible,
        }
    }
}

impl FormView for MemoryFormView {
    fn field_value(&self, field: Field) -> String {
        let state = self.lock();
        match field {
            Field::Url => state.url.clone(),
            Field::ExpirationDays => state.expiration_days.clone(),
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.lock().submit_enabled = enabled;
    }

    fn show(&self, region: Region) {
        self.set_region(region, true);
    }

    fn hide(&self, region: Region) {
        self.set_region(region, false);
    }

    fn set_output_text(&self, text: &str) {
        self.lock().output_text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_page_has_enabled_submit_and_hidden_regions() {
        let snapshot = MemoryFormView::new().snapshot();
        assert!(snapshot.submit_enabled);
        assert!(!snapshot.output_container_visible);
        assert!(!snapshot.error_visible);
    }

    #[test]
    fn shared_handles_mutate_the_same_page() {
        let view = Arc::new(MemoryFormView::with_fields("https://a/", "3"));
        let handle = Arc::clone(&view);
        handle.show(Region::Error);
        (&*view).set_output_text("<b>not markup</b>");

        let snapshot = view.snapshot();
        assert!(snapshot.error_visible);
        assert_eq!(snapshot.output_text, "<b>not markup</b>");
        assert_eq!(handle.field_value(Field::ExpirationDays), "3");
    }

    #[test]
    fn default_ids_match_portal_page() {
        let ids = ElementIds::default();
        assert_eq!(ids.form, "guest-form");
        assert_eq!(ids.output_container, "guest-output-container");
        assert_eq!(ids.error, "guest-error");
    }
}
