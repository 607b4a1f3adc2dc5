use std::{collections::HashMap, path::Path};

use trackrelay::config;

// Reads the shipped `.env.example` into a key/value map
fn env_template() -> HashMap<String, String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env.example");
    dotenv::from_path_iter(&path)
        .unwrap()
        .map(|item| item.unwrap())
        .collect()
}

#[test]
fn test_template_does_not_enable_relay_mode() {
    let template = env_template();

    assert_eq!(template.get("RELAY_BASE_URL").map(String::as_str), Some(""));
}

#[test]
fn test_template_defaults_match_builtin_defaults() {
    let template = env_template();

    assert_eq!(template["SERVER_ADDRESS"], config::DEFAULT_SERVER_ADDRESS);
    assert_eq!(template["SPOTIFY_API_URL"], config::DEFAULT_SPOTIFY_API_URL);
    assert_eq!(template["SPOTIFY_API_TOKEN_URL"], config::DEFAULT_SPOTIFY_TOKEN_URL);
    assert_eq!(template["TELEGRAM_API_URL"], config::DEFAULT_TELEGRAM_API_URL);
    assert_eq!(
        template["HTTP_TIMEOUT_SECS"].parse::<u64>().unwrap(),
        config::DEFAULT_HTTP_TIMEOUT_SECS
    );
    assert_eq!(
        template["TELEGRAM_POLL_TIMEOUT_SECS"].parse::<u64>().unwrap(),
        config::DEFAULT_POLL_TIMEOUT_SECS
    );
}
