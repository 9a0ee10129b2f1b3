use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::query::NullValueHandling;

/// Global defaults loaded from `~/.config/urlforge/config.toml`.
///
/// Command-line flags override every value here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlforgeConfig {
    /// Policy for absent query values when no `--null-value-handling` is given.
    #[serde(default)]
    pub null_value_handling: NullValueHandling,
    /// Encode spaces in query output as `+` instead of `%20`.
    #[serde(default)]
    pub encode_space_as_plus: bool,
    /// Scheme applied by `build-url` when the result has a host but no scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scheme: Option<String>,
}

impl Default for UrlforgeConfig {
    fn default() -> Self {
        Self {
            null_value_handling: NullValueHandling::Remove,
            encode_space_as_plus: false,
            default_scheme: None,
        }
    }
}

/// `~/.config/urlforge/config.toml`. Nothing is created on disk.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlforge")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the user config file, or defaults if there is none.
pub fn load_or_default() -> Result<UrlforgeConfig> {
    load_optional(&config_path()?)
}

/// Load `path` if it exists; a missing file yields defaults and is not created.
pub fn load_optional(path: &Path) -> Result<UrlforgeConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(UrlforgeConfig::default());
    }
    load_from(path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlforgeConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: UrlforgeConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
