//! Tests for server configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        host = "127.0.0.1"
        port = 8080
        enable_cors = false
        static_dir = "public"
        log_filter = "footprint_server=debug"
        banner = false
    "#;

    let config = ServerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert!(!config.enable_cors);
    assert_eq!(config.static_dir, PathBuf::from("public"));
    assert_eq!(config.log_filter, "footprint_server=debug");
    assert!(!config.banner);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ServerConfig::from_toml_str("port = 9000").unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "0.0.0.0");
    assert!(config.enable_cors);
    assert_eq!(config.static_dir, PathBuf::from("static"));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        host: "::1"
        port: 7000
        enable_cors: false
    "#;

    let config = ServerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.port, 7000);
    assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:7000");
}

#[test]
fn test_invalid_toml() {
    let err = ServerConfig::from_toml_str("port = \"eighty\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = ServerConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(
        ServerConfig::load("does/not/exist.yaml").unwrap_or_default(),
        ServerConfig::default()
    );
}

#[test]
fn test_builder() {
    let config = ServerConfig::new()
        .with_host("127.0.0.1")
        .with_port(0)
        .with_static_dir("assets");

    assert_eq!(config.socket_addr().unwrap().port(), 0);
    assert_eq!(config.static_dir, PathBuf::from("assets"));
}

#[test]
fn test_bad_host() {
    let config = ServerConfig::new().with_host("not a host");
    assert!(matches!(config.socket_addr(), Err(ConfigError::Invalid(_))));
}
