use activity_advisor::config::JsonConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("advisor.yaml");
    fs::write(
        &path,
        r#"
api:
  endpoint: http://localhost:11434/v1
  request_timeout: 20
model:
  default_model: llama3.1
session:
  verbose: true
tools:
  max_rounds: 4
  timeout: 3
  location_url: http://geo.internal/json/
"#,
    )
    .unwrap();

    let config = JsonConfig::load_from(&path).unwrap();
    assert_eq!(config.api.endpoint.as_deref(), Some("http://localhost:11434/v1"));
    assert_eq!(config.api.request_timeout, Some(20));
    assert_eq!(config.model.default_model.as_deref(), Some("llama3.1"));
    assert_eq!(config.session.verbose, Some(true));
    assert_eq!(config.tools.max_rounds, 4);
    assert_eq!(config.tools.timeout, 3);
    assert_eq!(config.tools.location_url.as_deref(), Some("http://geo.internal/json/"));
    assert_eq!(config.tools.weather_url, None);
}

#[test]
fn test_load_json_config_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("advisor.json");
    fs::write(&path, r#"{"model": {"default_model": "gpt-4o"}}"#).unwrap();

    let config = JsonConfig::load_from(&path).unwrap();
    assert_eq!(config.model.default_model.as_deref(), Some("gpt-4o"));
    assert_eq!(config.tools.max_rounds, 10);
    assert_eq!(config.tools.timeout, 10);
    assert!(config.api.endpoint.is_none());
}

#[test]
fn test_invalid_config_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("advisor.yaml");
    fs::write(&path, "tools: [not, a, map]\n").unwrap();

    let err = JsonConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("advisor.yaml"));
}

#[test]
fn test_config_paths_prefer_working_directory() {
    let paths = JsonConfig::get_config_paths();
    assert_eq!(paths[0].to_str(), Some(".advisor.yaml"));
    assert_eq!(paths[2].to_str(), Some(".advisor.json"));
}
