use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use bartender_server::config::Config;

fn load(vars: &[(&str, &str)]) -> eyre::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_fill_optional_settings() {
    let config = load(&[
        ("DATABASE_URL", "postgres://db/bartender"),
        ("OPENAI_API_KEY", "sk-test"),
    ])
    .unwrap();

    assert_eq!(config.port, 3001);
    assert_eq!(config.storage.database_url, "postgres://db/bartender");
    assert_eq!(config.storage.max_connections, 5);
    assert_eq!(config.openai.api_key, "sk-test");
    assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
    assert_eq!(config.openai.timeout, Duration::from_secs(30));
    assert_eq!(config.engines.generation, "davinci");
    assert_eq!(config.engines.content_filter, "content-filter-alpha-c4");
    assert_eq!(config.training_text_path, PathBuf::from("training-text.txt"));
}

#[test]
fn overrides_are_applied() {
    let config = load(&[
        ("PORT", "8080"),
        ("DATABASE_URL", "sqlite://bartender.db?mode=rwc"),
        ("DATABASE_MAX_CONNECTIONS", "12"),
        ("OPENAI_API_KEY", "sk-test"),
        ("OPENAI_BASE_URL", "http://localhost:9000/v1"),
        ("GENERATION_ENGINE", "curie"),
        ("FILTER_ENGINE", "filter-x"),
        ("GENERATION_TIMEOUT_SECS", "5"),
        ("TRAINING_TEXT_PATH", "/etc/bartender/corpus.txt"),
    ])
    .unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.storage.max_connections, 12);
    assert_eq!(config.openai.base_url, "http://localhost:9000/v1");
    assert_eq!(config.openai.timeout, Duration::from_secs(5));
    assert_eq!(config.engines.generation, "curie");
    assert_eq!(config.engines.content_filter, "filter-x");
    assert_eq!(
        config.training_text_path,
        PathBuf::from("/etc/bartender/corpus.txt")
    );
}

#[test]
fn legacy_key_variable_is_accepted() {
    let config = load(&[("DATABASE_URL", "postgres://db/b"), ("GPT_KEY", "sk-legacy")]).unwrap();
    assert_eq!(config.openai.api_key, "sk-legacy");
}

#[test]
fn missing_database_url_fails() {
    let err = load(&[("OPENAI_API_KEY", "sk-test")]).err().unwrap();
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn missing_api_key_fails() {
    let err = load(&[("DATABASE_URL", "postgres://db/b"), ("OPENAI_API_KEY", "  ")])
        .err()
        .unwrap();
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[test]
fn malformed_port_fails() {
    let err = load(&[
        ("DATABASE_URL", "postgres://db/b"),
        ("OPENAI_API_KEY", "sk-test"),
        ("PORT", "eighty"),
    ])
    .err()
    .unwrap();
    assert!(err.to_string().contains("PORT"));
}
