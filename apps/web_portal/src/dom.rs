//! Binding of the guest-link form to the portal document.

use client_core::HttpGuestLinkClient;
use thiserror::Error;
use tracing::warn;
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::controller::GuestLinkFormController;
use crate::view::{ElementIds, Field, FormView, Region, SubmitTrigger};

#[derive(Debug, Error)]
pub enum DomBindingError {
    #[error("no document available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("document has no base URL")]
    NoBaseUrl,
    #[error("invalid document URL: {0}")]
    InvalidDocumentUrl(#[from] url::ParseError),
    #[error("failed to register submit listener: {0}")]
    Listener(String),
}

impl SubmitTrigger for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// Element handles resolved once when the form is bound.
pub struct DomFormView {
    url_input: HtmlInputElement,
    expiration_input: HtmlInputElement,
    submit: Element,
    output_container: HtmlElement,
    output: Element,
    error: HtmlElement,
}

impl DomFormView {
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Self, DomBindingError> {
        Ok(Self {
            url_input: element_as(document, &ids.url_input, "an input")?,
            expiration_input: element_as(document, &ids.expiration_input, "an input")?,
            submit: element(document, &ids.submit)?,
            output_container: element_as(document, &ids.output_container, "an HTML element")?,
            output: element(document, &ids.output)?,
            error: element_as(document, &ids.error, "an HTML element")?,
        })
    }

    fn region(&self, region: Region) -> &HtmlElement {
        match region {
            Region::OutputContainer => &self.output_container,
            Region::Error => &self.error,
        }
    }

    fn set_display(&self, region: Region, display: &str) {
        if let Err(err) = self.region(region).style().set_property("display", display) {
            warn!(?region, ?err, "failed to toggle region visibility");
        }
    }
}

impl FormView for DomFormView {
    fn field_value(&self, field: Field) -> String {
        match field {
            Field::Url => self.url_input.value(),
            Field::ExpirationDays => self.expiration_input.value(),
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        let result = if enabled {
            self.submit.remove_attribute("disabled")
        } else {
            self.submit.set_attribute("disabled", "")
        };
        if let Err(err) = result {
            warn!(enabled, ?err, "failed to toggle submit control");
        }
    }

    fn show(&self, region: Region) {
        self.set_display(region, "");
    }

    fn hide(&self, region: Region) {
        self.set_display(region, "none");
    }

    fn set_output_text(&self, text: &str) {
        self.output.set_text_content(Some(text));
    }
}

fn element(document: &Document, id: &str) -> Result<Element, DomBindingError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomBindingError::MissingElement(id.to_string()))
}

fn element_as<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, DomBindingError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| DomBindingError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

/// Wires the guest-link form of the current page to the portal API.
///
/// The controller and its listener live as long as the page.
pub fn bind_guest_form(ids: &ElementIds) -> Result<(), DomBindingError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomBindingError::NoDocument)?;

    let form: HtmlFormElement = element_as(&document, &ids.form, "a form")?;
    let view = DomFormView::resolve(&document, ids)?;
    let document_url = document
        .base_uri()
        .ok()
        .flatten()
        .ok_or(DomBindingError::NoBaseUrl)?;
    let client = HttpGuestLinkClient::for_document(&document_url)?;

    let controller: &'static GuestLinkFormController<DomFormView, HttpGuestLinkClient> =
        Box::leak(Box::new(GuestLinkFormController::new(view, client)));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        // preventDefault only counts while the event is still dispatching.
        let submission = controller.begin_submit(&event);
        wasm_bindgen_futures::spawn_local(async move {
            submission.complete().await;
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|err| DomBindingError::Listener(format!("{err:?}")))?;
    on_submit.forget();

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Failure details reach the operator through the browser console. A host
    // that installed its own subscriber keeps it.
    let _ = tracing_wasm::try_set_as_global_default();
    bind_guest_form(&ElementIds::default()).map_err(|err| JsValue::from_str(&err.to_string()))
}
