use super::*;
use crate::ElyraError;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
#[serial]
fn test_empty_document_uses_defaults() {
    let config = ConfigLoader::from_str("").unwrap();

    assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
    assert_eq!(config.market.base_url, "https://api.dexscreener.com");
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.llm.max_tokens, 500);
    assert_eq!(config.market.timeout_secs, 30);
}

#[test]
#[serial]
fn test_partial_yaml_overrides() {
    let yaml = r#"
server:
  bind_addr: "0.0.0.0:8080"
  cors_origins: ["https://elyra.example"]
market:
  base_url: "http://localhost:9999"
llm:
  model: "gpt-4.1-mini"
  max_tokens: 256
"#;

    let config = ConfigLoader::from_str(yaml).unwrap();
    assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    assert_eq!(
        config.server.cors_origins,
        Some(vec!["https://elyra.example".to_string()])
    );
    assert_eq!(config.market.base_url, "http://localhost:9999");
    assert_eq!(config.llm.model, "gpt-4.1-mini");
    assert_eq!(config.llm.max_tokens, 256);
    assert_eq!(config.llm.timeout_secs, 30);
}

#[test]
#[serial]
fn test_llm_auth_resolved_from_environment() {
    std::env::set_var("ELYRA_TEST_KEY", "sk-from-env");
    std::env::set_var("ELYRA_TEST_BASE", "http://llm.local/v1");

    let yaml = r#"
llm:
  api_base_env: ELYRA_TEST_BASE
  auth:
    api_key_env: ELYRA_TEST_KEY
"#;
    let config = ConfigLoader::from_str(yaml).unwrap();

    assert_eq!(config.llm.auth.api_key.as_deref(), Some("sk-from-env"));
    assert_eq!(config.llm.api_base.as_deref(), Some("http://llm.local/v1"));

    std::env::remove_var("ELYRA_TEST_KEY");
    std::env::remove_var("ELYRA_TEST_BASE");
}

#[test]
#[serial]
fn test_explicit_key_wins_over_environment() {
    std::env::set_var("ELYRA_TEST_KEY_2", "sk-from-env");

    let yaml = r#"
llm:
  auth:
    api_key: sk-inline
    api_key_env: ELYRA_TEST_KEY_2
"#;
    let config = ConfigLoader::from_str(yaml).unwrap();
    assert_eq!(config.llm.auth.api_key.as_deref(), Some("sk-inline"));

    std::env::remove_var("ELYRA_TEST_KEY_2");
}

#[tokio::test]
#[serial]
async fn test_env_file_is_loaded() {
    let mut env_file = NamedTempFile::new().unwrap();
    writeln!(env_file, "# comment").unwrap();
    writeln!(env_file, "ELYRA_TEST_ENV_FILE_KEY=\"sk-dotenv\"").unwrap();

    let yaml = format!(
        "environment:\n  env_files: [\"{}\"]\nllm:\n  auth:\n    api_key_env: ELYRA_TEST_ENV_FILE_KEY\n",
        env_file.path().display()
    );

    let mut config_file = NamedTempFile::new().unwrap();
    config_file.write_all(yaml.as_bytes()).unwrap();

    let config = ConfigLoader::from_file(config_file.path()).await.unwrap();
    assert_eq!(config.llm.auth.api_key.as_deref(), Some("sk-dotenv"));

    std::env::remove_var("ELYRA_TEST_ENV_FILE_KEY");
}

#[tokio::test]
#[serial]
async fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::load_or_default(dir.path().join("elyra.yaml"))
        .await
        .unwrap();
    assert_eq!(config.market.base_url, "https://api.dexscreener.com");
}

#[test]
#[serial]
fn test_validation_rejects_bad_values() {
    let bad_url = ConfigLoader::from_str("market:\n  base_url: ftp://nope\n");
    assert!(matches!(bad_url, Err(ElyraError::ConfigError(_))));

    let zero_tokens = ConfigLoader::from_str("llm:\n  max_tokens: 0\n");
    assert!(matches!(zero_tokens, Err(ElyraError::ConfigError(_))));

    let bad_yaml = ConfigLoader::from_str("server: [unclosed");
    assert!(matches!(bad_yaml, Err(ElyraError::ConfigError(_))));
}
