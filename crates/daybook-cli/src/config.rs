use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use daybook_core::advice::{GeminiConfig, DEFAULT_MODEL};

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaybookConfig {
    pub storage: StorageSection,
    pub ui: UiSection,
    pub advice: AdviceSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub editor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceSection {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub language: String,
}

impl Default for AdviceSection {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 30,
            language: "English".to_string(),
        }
    }
}

impl AdviceSection {
    /// Client settings, with `env_key` taking precedence over the file.
    pub fn client_config(&self, env_key: Option<String>) -> GeminiConfig {
        let api_key = env_key
            .or_else(|| self.api_key.clone())
            .unwrap_or_default();
        let mut config = GeminiConfig::new(api_key);
        config.model = self.model.clone();
        config.timeout = Duration::from_secs(self.timeout_seconds.max(1));
        config.language = self.language.clone();
        config
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("daybook.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DaybookConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daybook"));
        }
    }
    Ok(home_dir()?.join(".config").join("daybook"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daybook"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("daybook"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
