use super::*;
use tempfile::tempdir;

const MINIMAL: &str = r#"
api_url: https://transform.example.com
project: acme-analytics
location: us-central1
repository: warehouse
environment: main
"#;

#[test]
fn test_load_minimal_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, MINIMAL).unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.environment, "main");
    assert_eq!(config.freshness_lag_minutes, 1440);
    assert_eq!(config.api_token_env, "WARPLINE_API_TOKEN");
    assert_eq!(config.docs_base_url, DEFAULT_DOCS_BASE_URL);
}

#[test]
fn test_parent_handle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, MINIMAL).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(
        config.parent(),
        "projects/acme-analytics/locations/us-central1/repositories/warehouse"
    );
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = Config::load_from_dir(dir.path());
    assert!(matches!(result, Err(CoreError::ConfigNotFound { .. })));
}

#[test]
fn test_empty_field_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, MINIMAL.replace("main", "\"\"")).unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(CoreError::ConfigInvalid { .. })));
}

#[test]
fn test_unknown_field_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, format!("{}\nnot_a_field: 1\n", MINIMAL)).unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(CoreError::YamlParse(_))));
}
