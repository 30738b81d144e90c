//! Persist the mirror configuration (TOML under the XDG state dir) so the
//! process-wide state survives across CLI invocations.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::MirrorConfig;

impl MirrorConfig {
    /// Default path for the persisted configuration:
    /// `~/.local/state/cransnap/mirrors.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("cransnap")?;
        Ok(xdg_dirs.place_state_file("mirrors.toml")?)
    }

    /// Save to the given path (creates the parent dir if needed).
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let toml = toml::to_string_pretty(self).context("serialize mirror config")?;
        std::fs::write(path, toml)
            .with_context(|| format!("write mirror config: {}", path.display()))?;
        Ok(())
    }

    /// Load from the given path. A missing file returns None so the caller
    /// can fall back to [`MirrorConfig::cran`].
    pub fn load_from_path(path: &Path) -> Result<Option<MirrorConfig>> {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read mirror config: {}", path.display()))
            }
        };
        let cfg: MirrorConfig = toml::from_str(&data)
            .with_context(|| format!("parse mirror config: {}", path.display()))?;
        Ok(Some(cfg))
    }
}
