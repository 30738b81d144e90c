//! `cransnap show` – show the current mirror configuration.

use anyhow::Result;
use cransnap_core::mirrors::MirrorConfig;

use super::print_mirrors;

pub fn run_show() -> Result<()> {
    let path = MirrorConfig::default_path()?;
    let mirrors = MirrorConfig::load_from_path(&path)?.unwrap_or_else(MirrorConfig::cran);
    print_mirrors(&mirrors);
    Ok(())
}
