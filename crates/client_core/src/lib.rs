use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{GuestLinkRequest, GuestLinkResponse};
use tracing::debug;
use url::Url;

pub mod config;
pub mod error;

pub use error::{ErrorCategory, GuestLinkError};
pub use reqwest::StatusCode;

/// Network capability the portal form submits through.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait GuestLinkApi {
    async fn create_guest_link(
        &self,
        request: &GuestLinkRequest,
    ) -> Result<GuestLinkResponse, GuestLinkError>;
}

#[derive(Debug, Clone)]
pub struct HttpGuestLinkClient {
    http: Client,
    endpoint: Url,
}

impl HttpGuestLinkClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Client for a portal page served at `document_url`.
    pub fn for_document(document_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(config::resolve_endpoint(document_url)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl GuestLinkApi for HttpGuestLinkClient {
    async fn create_guest_link(
        &self,
        request: &GuestLinkRequest,
    ) -> Result<GuestLinkResponse, GuestLinkError> {
        debug!(endpoint = %self.endpoint, "posting guest link request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(GuestLinkError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuestLinkError::Status { status });
        }

        let body = response.bytes().await.map_err(GuestLinkError::Body)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
