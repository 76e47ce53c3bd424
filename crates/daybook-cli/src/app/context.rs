//! Application context for the Daybook CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use daybook_core::advice::GeminiClient;
use daybook_core::{DiaryStore, HealthStore, SqliteStore, SystemClock};

use crate::cli::Cli;
use crate::config::{read_config, DaybookConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::{resolve_config_path, resolve_data_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DaybookConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, or defaults when it does not exist.
    pub fn config(&self) -> anyhow::Result<&DaybookConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                tracing::debug!(path = %path.display(), "reading config");
                read_config(&path)
            } else {
                Ok(DaybookConfig::default())
            }
        })
    }

    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        resolve_data_path(self.cli.data.as_deref(), self.config()?)
    }

    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.ui.editor.as_deref())
    }

    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.data_path()?;
        Ok(SqliteStore::open(&path)?)
    }

    pub fn diary(&self) -> anyhow::Result<DiaryStore<SqliteStore>> {
        Ok(DiaryStore::new(self.open_store()?))
    }

    pub fn health(&self) -> anyhow::Result<HealthStore<SqliteStore>> {
        Ok(HealthStore::new(self.open_store()?))
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock
    }

    /// Gemini client from config, with GEMINI_API_KEY taking precedence.
    pub fn advice_client(&self) -> anyhow::Result<GeminiClient> {
        let env_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let settings = self.config()?.advice.client_config(env_key);
        GeminiClient::new(settings).map_err(|e| CliError::AdviceUnavailable(e.to_string()).into())
    }

    /// UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
