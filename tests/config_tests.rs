use budget_ledger::config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("config.json"));
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("config.json"));
    let config = Config {
        grouping_separator: ' ',
        decimal_separator: ',',
        color: true,
    };
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded, config);
    let options = loaded.format_options();
    assert_eq!(options.grouping_separator, ' ');
    assert!(options.color);
}

#[test]
fn invalid_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "42").unwrap();
    let err = ConfigManager::with_path(path).load().unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
}
