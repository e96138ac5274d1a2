use crate::Client;

use urob_config::ApiConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_keeps_path_prefix() {
    let client = Client::new("https://example.com/api//");
    assert_eq!(client.base_url, "https://example.com/api");
}

#[test]
fn test_from_config_uses_configured_url() {
    let client = Client::from_config(&ApiConfig::new("http://backend:9000/"));
    assert_eq!(client.base_url, "http://backend:9000");
}

#[test]
fn test_from_default_config() {
    let client = Client::from_config(&ApiConfig::default());
    assert_eq!(client.base_url, urob_config::DEFAULT_API_URL);
}

#[test]
fn test_clone_keeps_base_url() {
    let client = Client::new("http://localhost:8000");
    let cloned = client.clone();
    assert_eq!(cloned.base_url, client.base_url);
}
