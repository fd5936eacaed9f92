use atelier_app::config::Config;
use std::fs;

#[test]
fn test_config_with_provider() {
    let toml = r#"
data_dir = "./workspace"

[provider]
endpoint = "https://integrate.api.nvidia.com/v1/chat/completions"
model = "moonshotai/kimi-k2.5"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    let provider = config.provider.expect("provider table should parse");
    assert_eq!(provider.model, "moonshotai/kimi-k2.5");
    assert_eq!(config.data_dir.to_str().unwrap(), "./workspace");
}

#[test]
fn test_config_without_provider_is_local() {
    let config: Config = toml::from_str("data_dir = \"./data\"").unwrap();
    assert!(config.provider.is_none());
}

#[test]
fn test_missing_config_file_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("atelier.toml")).unwrap();

    assert!(config.provider.is_none());
    assert!(config.state_path().ends_with("dashboard.json"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("atelier.toml");

    let config = Config::default();
    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = Config::load_or_default(&path).unwrap();
    assert_eq!(loaded.data_dir, config.data_dir);
}
