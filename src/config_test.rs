use super::*;

#[test]
fn defaults_point_at_local_backend() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config.api_base_url, "http://localhost:8000/api");
    assert_eq!(config.log_level, log::Level::Info);
    assert_eq!(config.session_check_interval, Duration::from_secs(840));
}

#[test]
fn api_url_is_trimmed() {
    let config = ClientConfig::from_values(Some(" https://archive.aastu.edu.et/api/ "), None);
    assert_eq!(config.api_base_url, "https://archive.aastu.edu.et/api");
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let config = ClientConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base_url, ClientConfig::default().api_base_url);
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(ClientConfig::from_values(None, Some("DEBUG")).log_level, log::Level::Debug);
    assert_eq!(ClientConfig::from_values(None, Some("nope")).log_level, log::Level::Info);
}

#[test]
fn api_client_carries_base_url_and_token() {
    let api = ClientConfig::default().api(Some("tok".to_owned()));
    assert_eq!(api.url("/user"), "http://localhost:8000/api/user");
    assert_eq!(api.token(), Some("tok"));
}
