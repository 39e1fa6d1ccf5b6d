//! Pipeline configuration loaded from YAML files.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings for the blood-test processing pipeline.
///
/// Credentials can come from the environment instead of the file: when set
/// and non-empty, `TELEGRAM_TOKEN` and `FATSECRET_KEY` override the
/// corresponding fields after the file is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Model identifier passed to the downstream ML stage.
    pub model_name: String,
    pub batch_size: usize,
    pub learning_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatsecret_key: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file and apply environment overrides.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        if let Some(token) = env::var("TELEGRAM_TOKEN").ok().filter(|v| !v.is_empty()) {
            config.telegram_token = Some(token);
        }
        if let Some(key) = env::var("FATSECRET_KEY").ok().filter(|v| !v.is_empty()) {
            config.fatsecret_key = Some(key);
        }

        Ok(config)
    }

    /// Write the configuration to a YAML file. Unset credentials are omitted
    /// rather than serialized as nulls.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_loads_fields_from_yaml() {
        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("FATSECRET_KEY");

        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "model_name: bert-base-uncased\nbatch_size: 32\nlearning_rate: 0.00002\n",
        );

        let config = Config::from_yaml(&path).unwrap();
        assert_eq!(config.model_name, "bert-base-uncased");
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.learning_rate, 0.00002);
        assert_eq!(config.telegram_token, None);
        assert_eq!(config.fatsecret_key, None);
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file_credentials() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "model_name: m\nbatch_size: 1\nlearning_rate: 0.1\ntelegram_token: from-file\n",
        );

        env::set_var("TELEGRAM_TOKEN", "from-env");
        env::remove_var("FATSECRET_KEY");
        let config = Config::from_yaml(&path).unwrap();
        env::remove_var("TELEGRAM_TOKEN");

        assert_eq!(config.telegram_token.as_deref(), Some("from-env"));
        assert_eq!(config.fatsecret_key, None);
    }

    #[test]
    #[serial]
    fn test_empty_environment_values_do_not_override() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "model_name: m\nbatch_size: 1\nlearning_rate: 0.1\ntelegram_token: from-file\n",
        );

        env::set_var("TELEGRAM_TOKEN", "");
        let config = Config::from_yaml(&path).unwrap();
        env::remove_var("TELEGRAM_TOKEN");

        assert_eq!(config.telegram_token.as_deref(), Some("from-file"));
    }

    #[test]
    #[serial]
    fn test_save_omits_unset_credentials() {
        env::remove_var("TELEGRAM_TOKEN");
        env::remove_var("FATSECRET_KEY");

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.yml");

        let config = Config {
            model_name: "m".to_string(),
            batch_size: 8,
            learning_rate: 0.5,
            telegram_token: None,
            fatsecret_key: None,
        };
        config.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("telegram_token"));
        assert!(!written.contains("fatsecret_key"));

        let reloaded = Config::from_yaml(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_missing_file_reports_the_path() {
        let error = Config::from_yaml(Path::new("does/not/exist.yml")).unwrap_err();
        assert!(error.to_string().contains("does/not/exist.yml"));
    }
}
