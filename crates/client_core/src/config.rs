use std::{collections::HashMap, fs};

use shared::protocol::GUEST_LINK_PATH;
use url::Url;

pub const SETTINGS_FILE: &str = "guest_link.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Location of the portal document the endpoint is resolved against.
    pub server_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080/".into(),
        }
    }
}

impl ClientSettings {
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        resolve_endpoint(&self.server_url)
    }
}

/// Reads `guest_link.toml` from the working directory, then applies env overrides.
pub fn load_settings() -> ClientSettings {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_with(raw.as_deref(), |key| std::env::var(key).ok())
}

pub fn load_settings_with(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("server_url") {
                    settings.server_url = v.clone();
                }
            }
            Err(err) => tracing::warn!(error = %err, "ignoring unreadable {SETTINGS_FILE}"),
        }
    }

    if let Some(v) = env("GUEST_LINK_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

/// Resolves the guest-link endpoint the way a browser resolves a relative fetch.
pub fn resolve_endpoint(document_url: &str) -> Result<Url, url::ParseError> {
    Url::parse(document_url.trim())?.join(GUEST_LINK_PATH)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
