//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::infra::Backend;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "NOTEKEEPER_CONFIG";

const DEFAULT_EDITOR: &str = "nano";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Store location
    pub store: Option<PathBuf>,

    /// Storage backend
    pub backend: Option<Backend>,

    /// Editor command for editing notes
    pub editor: Option<String>,

    /// Set to false to disable colored output
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, defaulting if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `$NOTEKEEPER_CONFIG` if set, else `~/.config/notekeeper/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notekeeper")
            .join("config.toml")
    }

    /// Resolve the backend, with CLI argument taking precedence.
    pub fn backend(&self, cli_backend: Option<Backend>) -> Backend {
        cli_backend.or(self.backend).unwrap_or_default()
    }

    /// Resolve the store location.
    ///
    /// Precedence order:
    /// 1. CLI `--store` argument
    /// 2. Config file `store` setting
    /// 3. `~/.notes_db.json` (json) or `~/notes` (dir)
    pub fn store_path(&self, cli_store: Option<&PathBuf>, backend: Backend) -> PathBuf {
        cli_store
            .cloned()
            .or_else(|| self.store.as_deref().map(expand_tilde))
            .unwrap_or_else(|| default_store_path(backend))
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "nano" as fallback
    pub fn editor(&self) -> String {
        resolve_editor(
            self.editor.as_deref(),
            std::env::var("EDITOR").ok().as_deref(),
            std::env::var("VISUAL").ok().as_deref(),
        )
    }

    /// Whether output should carry ANSI colors.
    pub fn color_enabled(&self, no_color_flag: bool) -> bool {
        color_enabled(
            no_color_flag,
            self.color,
            std::env::var_os("NO_COLOR").is_some(),
            std::io::stdout().is_terminal(),
        )
    }
}

fn resolve_editor(config: Option<&str>, editor: Option<&str>, visual: Option<&str>) -> String {
    [config, editor, visual]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_EDITOR)
        .to_string()
}

fn color_enabled(no_color_flag: bool, config: Option<bool>, no_color_env: bool, tty: bool) -> bool {
    !no_color_flag && !no_color_env && config.unwrap_or(true) && tty
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_store_path(backend: Backend) -> PathBuf {
    match backend {
        Backend::Json => home_dir().join(".notes_db.json"),
        Backend::Dir => home_dir().join("notes"),
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir().join(rest),
        Err(_) => path.to_path_buf(),
    }
}
