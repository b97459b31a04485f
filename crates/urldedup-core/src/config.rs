use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{LineSeparator, TextOptions, ViewMode};

/// Global configuration loaded from `~/.config/urldedup/config.toml`.
///
/// Every key is optional in the file; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlDedupConfig {
    /// View used when none is given on the command line: "table" or "text".
    pub default_view: ViewMode,
    /// Separator between URLs in text output and copies: "single" or "double".
    pub line_separator: LineSeparator,
    /// Prefix text lines with `[x]` / `[ ]` used markers.
    pub show_markers: bool,
    /// Artificial delay before normalizing in interactive mode, in milliseconds.
    pub submit_delay_ms: u64,
}

impl Default for UrlDedupConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Table,
            line_separator: LineSeparator::Single,
            show_markers: false,
            submit_delay_ms: 0,
        }
    }
}

impl UrlDedupConfig {
    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            separator: self.line_separator,
            markers: self.show_markers,
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldedup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlDedupConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlDedupConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<UrlDedupConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlDedupConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
