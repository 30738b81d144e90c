//! `cransnap reset` – restore the default CRAN mirror configuration.

use anyhow::Result;
use cransnap_core::mirrors::MirrorConfig;

use super::print_mirrors;

pub fn run_reset() -> Result<()> {
    let path = MirrorConfig::default_path()?;
    let mirrors = MirrorConfig::cran();
    mirrors.save_to_path(&path)?;
    tracing::info!("mirror configuration reset to default CRAN");
    print_mirrors(&mirrors);
    Ok(())
}
