use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::errors::ConfigError;
use crate::presentation::FormatOptions;

const CONFIG_ENV: &str = "BUDGET_LEDGER_CONFIG";
const DEFAULT_DIR_NAME: &str = ".budget_ledger";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Display preferences read from `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            color: false,
        }
    }
}

impl Config {
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            grouping_separator: self.grouping_separator,
            decimal_separator: self.decimal_separator,
            color: self.color,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the config path from `BUDGET_LEDGER_CONFIG`, falling back to
    /// `~/.budget_ledger/config.json`.
    pub fn new() -> Self {
        let path = match env::var_os(CONFIG_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DIR_NAME)
                .join(CONFIG_FILE),
        };
        Self::with_path(path)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the config, returning defaults when the file does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tmp_path_appends_suffix_to_extension() {
        let tmp = tmp_path(Path::new("/x/config.json"));
        assert_eq!(tmp, PathBuf::from("/x/config.json.tmp"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "color": true }"#).unwrap();
        assert!(config.color);
        assert_eq!(config.grouping_separator, ',');
        assert_eq!(config.decimal_separator, '.');
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("nested").join(CONFIG_FILE));
        manager.save(&Config::default()).unwrap();
        assert!(manager.path().exists());
        assert!(!tmp_path(manager.path()).exists());
    }
}
