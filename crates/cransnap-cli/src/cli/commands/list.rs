//! `cransnap list` – list the snapshot dates a server exposes.

use anyhow::{Context, Result};
use cransnap_core::listing::list_snapshots;

pub fn run_list(base_url: &str) -> Result<()> {
    let dates =
        list_snapshots(base_url).with_context(|| format!("list snapshots at {base_url}"))?;
    if dates.is_empty() {
        println!("No snapshots listed at {base_url}.");
    } else {
        for date in dates {
            println!("{date}");
        }
    }
    Ok(())
}
