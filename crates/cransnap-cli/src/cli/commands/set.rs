//! `cransnap set <date>` – switch the CRAN mirror to a dated snapshot.

use anyhow::{Context, Result};
use cransnap_core::mirrors::MirrorConfig;
use cransnap_core::switch::switch_to_snapshot;

use super::print_mirrors;

pub fn run_set(date: &str, base_url: &str, verify: bool) -> Result<()> {
    let path = MirrorConfig::default_path()?;
    let mut mirrors = MirrorConfig::load_from_path(&path)?.unwrap_or_else(MirrorConfig::cran);

    switch_to_snapshot(&mut mirrors, date, base_url, verify)
        .with_context(|| format!("switch CRAN mirror to snapshot {date}"))?;
    mirrors.save_to_path(&path)?;

    print_mirrors(&mirrors);
    Ok(())
}
