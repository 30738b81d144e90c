use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Public host serving dated snapshots, used when nothing else is configured.
pub const DEFAULT_SNAPSHOT_HOST: &str = "https://mran.microsoft.com";

/// Global configuration loaded from `~/.config/cransnap/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Optional snapshot server override; when absent the public default
    /// host is used.
    #[serde(default)]
    pub snapshot_base_url: Option<String>,
}

impl SnapConfig {
    /// Base URL to use: the configured override or the public default host.
    pub fn base_url(&self) -> &str {
        self.snapshot_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SNAPSHOT_HOST)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cransnap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SnapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SnapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SnapConfig = toml::from_str(&data)?;
    Ok(cfg)
}
