use hotel_concierge_widget::config::{DEFAULT_QUICK_REPLIES, LogFormat, WidgetConfig};
use serial_test::serial;
use std::env;
use std::io::Write;

const BIN: &str = "hotel-concierge-widget";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CONFIG_FILE");
        env::remove_var("CONCIERGE_ENDPOINT__BASE_URL");
        env::remove_var("CONCIERGE_ENDPOINT__CHAT_PATH");
        env::remove_var("CONCIERGE_WIDGET__QUICK_REPLIES");
        env::remove_var("CONCIERGE_LOG__FORMAT");
    }
}

fn yaml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = WidgetConfig::load_from_args([BIN]).expect("Failed to load defaults");

    assert_eq!(config.endpoint.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.endpoint.chat_path, "/chat");
    assert_eq!(config.endpoint.hotel_info_path, "/hotel-info");
    assert_eq!(config.widget.assistant_name, "Costy");
    assert!(config.widget.welcome_message.starts_with("¡Bienvenido"));
    assert_eq!(config.widget.quick_replies.len(), DEFAULT_QUICK_REPLIES.len());
    assert_eq!(config.log.level, "warn");
    assert_eq!(config.log.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CONCIERGE_ENDPOINT__BASE_URL", "http://10.0.0.5:9000");
        env::set_var("CONCIERGE_LOG__FORMAT", "json");
    }

    let config = WidgetConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.endpoint.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.log.format, LogFormat::Json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_quick_replies_from_env_list() {
    clear_env_vars();
    unsafe {
        env::set_var("CONCIERGE_WIDGET__QUICK_REPLIES", "¿Wifi?,¿Desayuno?");
    }

    let config = WidgetConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.widget.quick_replies, vec!["¿Wifi?", "¿Desayuno?"]);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let file = yaml_file(
        r#"
endpoint:
  base_url: "https://concierge.costaazul.es"
  chat_path: "/api/chat"
widget:
  assistant_name: "Marina"
"#,
    );
    let path = file.path().to_str().unwrap().to_string();

    let config =
        WidgetConfig::load_from_args([BIN, "--config", path.as_str()]).expect("Failed to load file");

    assert_eq!(config.endpoint.base_url, "https://concierge.costaazul.es");
    assert_eq!(config.endpoint.chat_path, "/api/chat");
    assert_eq!(config.endpoint.hotel_info_path, "/hotel-info");
    assert_eq!(config.widget.assistant_name, "Marina");
}

#[test]
#[serial]
fn test_file_from_env_var() {
    clear_env_vars();

    let file = yaml_file(
        r#"
log:
  level: "debug"
"#,
    );
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = WidgetConfig::load_from_args([BIN]).expect("Failed to load file");
    assert_eq!(config.log.level, "debug");

    clear_env_vars();
}

#[test]
#[serial]
fn test_priority_cli_over_env_over_file() {
    clear_env_vars();

    let file = yaml_file(
        r#"
endpoint:
  base_url: "http://from-file:8000"
  chat_path: "/from-file"
"#,
    );
    let path = file.path().to_str().unwrap().to_string();
    unsafe {
        env::set_var("CONCIERGE_ENDPOINT__BASE_URL", "http://from-env:8000");
        env::set_var("CONCIERGE_ENDPOINT__CHAT_PATH", "/from-env");
    }

    let config = WidgetConfig::load_from_args([
        BIN,
        "--config",
        path.as_str(),
        "--base-url",
        "http://from-cli:8000",
    ])
    .expect("Failed to load config");

    assert_eq!(config.endpoint.base_url, "http://from-cli:8000");
    assert_eq!(config.endpoint.chat_path, "/from-env");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = WidgetConfig::load_from_args([BIN, "--config", "/nonexistent/concierge.yaml"]);
    assert!(result.is_err());
}
