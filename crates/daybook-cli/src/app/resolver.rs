//! Path resolution for the config file and database.

use std::path::PathBuf;

use crate::config::{default_config_path, default_data_path, DaybookConfig};

/// Resolve the config file path, checking DAYBOOK_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DAYBOOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the database path: `--data`/DAYBOOK_DATA, then config, then the
/// XDG data directory.
pub fn resolve_data_path(flag: Option<&str>, config: &DaybookConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.storage.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_data_path()
}
