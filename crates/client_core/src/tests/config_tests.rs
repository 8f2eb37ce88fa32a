use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_without_file_or_env() {
    assert_eq!(load_settings_with(None, no_env), ClientSettings::default());
}

#[test]
fn file_sets_server_url() {
    let settings = load_settings_with(Some(r#"server_url = "https://portal.example/""#), no_env);
    assert_eq!(settings.server_url, "https://portal.example/");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let settings = load_settings_with(Some(r#"server_url = "https://file.example/""#), |key| {
        match key {
            "GUEST_LINK_SERVER_URL" => Some("https://env.example/".into()),
            "APP__SERVER_URL" => Some("https://app.example/".into()),
            _ => None,
        }
    });
    assert_eq!(settings.server_url, "https://app.example/");
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let settings = load_settings_with(Some("server_url = ["), no_env);
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn resolves_endpoint_under_directory_document() {
    assert_eq!(
        resolve_endpoint("https://host/portal/").expect("resolve").as_str(),
        "https://host/portal/api/v1/guest-link"
    );
}

#[test]
fn resolves_endpoint_next_to_file_document() {
    assert_eq!(
        resolve_endpoint("https://host/portal?lang=de")
            .expect("resolve")
            .as_str(),
        "https://host/api/v1/guest-link"
    );
}

#[test]
fn rejects_relative_document_url() {
    assert!(resolve_endpoint("portal/").is_err());
}

#[test]
fn settings_endpoint_follows_loaded_server_url() {
    let settings = load_settings_with(Some(r#"server_url = "https://h/portal/""#), no_env);
    let endpoint = settings.endpoint().expect("endpoint");
    assert_eq!(endpoint.as_str(), "https://h/portal/api/v1/guest-link");
}
