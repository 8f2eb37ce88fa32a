use serde::{Deserialize, Serialize};

use crate::domain::Expiration;

/// Path of the guest-link endpoint, relative to the portal document.
pub const GUEST_LINK_PATH: &str = "api/v1/guest-link";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestLinkRequest {
    pub url: String,
    pub expiration: Expiration,
}

impl GuestLinkRequest {
    /// Builds the request from the two form fields as they were read.
    pub fn from_fields(url: impl Into<String>, expiration_days: &str) -> Self {
        Self {
            url: url.into(),
            expiration: Expiration::from_days_field(expiration_days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestLinkResponse {
    pub url: String,
}
