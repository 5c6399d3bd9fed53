use linkstat::config::{Config, load_from_path, save_to_path};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_valid() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let config_content = r#"
        [monitor]
        url = "http://192.168.1.9/stats"
        timeout_secs = 5

        [watch]
        interval_secs = 10
    "#;
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.monitor.url, "http://192.168.1.9/stats");
    assert_eq!(config.monitor.timeout_secs, 5);
    assert_eq!(config.watch.interval_secs, 10);
    config.validate().expect("Valid config must validate");
}

#[test]
fn test_load_config_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    // Every field has a default; an empty file is a valid config with no
    // endpoint set yet
    temp_file.write_all(b"").unwrap();

    let config = load_from_path(temp_file.path()).expect("Empty config should load defaults");

    assert_eq!(config.monitor.url, "");
    assert_eq!(config.monitor.timeout_secs, 10);
    assert_eq!(config.watch.interval_secs, 30);
}

#[test]
fn test_load_config_missing_file() {
    let result = load_from_path("/nonexistent/linkstat/config.toml");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_bad_url() {
    let config = Config {
        monitor: linkstat::config::MonitorConfig {
            url: "not a url".to_string(),
            timeout_secs: 10,
        },
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_non_http_scheme() {
    let config = Config {
        monitor: linkstat::config::MonitorConfig {
            url: "ftp://192.168.1.9/stats".to_string(),
            timeout_secs: 10,
        },
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = Config {
        monitor: linkstat::config::MonitorConfig {
            url: String::new(),
            timeout_secs: 0,
        },
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_save_round_trip_creates_parent_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(".linkstat").join("config.toml");

    let mut config = Config::default();
    config.monitor.url = "http://monitor.lan/stats".to_string();
    config.watch.interval_secs = 15;

    save_to_path(&config, &path).expect("Save should create the parent directory");

    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded.monitor.url, "http://monitor.lan/stats");
    assert_eq!(loaded.watch.interval_secs, 15);
}

#[test]
fn test_endpoint_url_prefers_override() {
    let mut config = Config::default();
    config.monitor.url = "http://configured.lan/stats".to_string();

    let url = config
        .endpoint_url(Some("http://cli.lan/stats".to_string()))
        .unwrap();
    assert_eq!(url, "http://cli.lan/stats");

    let url = config.endpoint_url(None).unwrap();
    assert_eq!(url, "http://configured.lan/stats");
}

#[test]
fn test_endpoint_url_unconfigured_fails() {
    let config = Config::default();

    let err = config.endpoint_url(None).unwrap_err();
    assert!(err.to_string().contains("stats endpoint not configured"));
}
