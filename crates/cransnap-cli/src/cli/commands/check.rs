//! `cransnap check <date>` – validate a snapshot date.

use anyhow::{Context, Result};
use cransnap_core::validate::validate_snapshot_date;

pub fn run_check(date: &str, base_url: &str, verify: bool) -> Result<()> {
    validate_snapshot_date(date, verify, base_url)
        .with_context(|| format!("validate snapshot date {date}"))?;
    if verify {
        println!("{date} is a valid snapshot date and exists on {base_url}.");
    } else {
        println!("{date} is a valid snapshot date.");
    }
    Ok(())
}
