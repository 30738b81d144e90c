//! Top-level mirror switch operation.

use crate::error::SnapshotError;
use crate::mirrors::MirrorConfig;
use crate::snapshot_url::snapshot_url;
use crate::validate::validate_snapshot_date;

const SUPPORTED_SCHEMES: [&str; 3] = ["http://", "https://", "file://"];

/// Repoints the CRAN entry of `cfg` at the dated snapshot under `base_url`.
///
/// The date is validated first (against the live listing too when `verify`
/// is set) and the base URL scheme is checked before the configuration is
/// touched, so on any failure `cfg` is left exactly as it was. Returns the
/// resulting configuration. Switching twice with the same date is a no-op
/// the second time.
pub fn switch_to_snapshot<'a>(
    cfg: &'a mut MirrorConfig,
    date: &str,
    base_url: &str,
    verify: bool,
) -> Result<&'a MirrorConfig, SnapshotError> {
    validate_snapshot_date(date, verify, base_url)?;

    if !SUPPORTED_SCHEMES.iter().any(|s| base_url.starts_with(s)) {
        return Err(SnapshotError::UnsupportedScheme(base_url.to_string()));
    }

    let url = snapshot_url(base_url, Some(date));
    tracing::info!("switching CRAN mirror to {url}");
    cfg.set_snapshot_entry(&url);
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirrors::{MirrorEntry, DEFAULT_CRAN_URL};

    const BASE: &str = "https://mran.microsoft.com";

    #[test]
    fn switch_rewrites_cran_and_preserves_others() {
        let mut cfg = MirrorConfig::new(vec![
            MirrorEntry::new("CRAN", DEFAULT_CRAN_URL),
            MirrorEntry::new("other", "https://x"),
        ]);
        let result = switch_to_snapshot(&mut cfg, "2020-01-01", BASE, false).unwrap();
        assert_eq!(
            result.entries()[0],
            MirrorEntry::new("CRAN", "https://mran.microsoft.com/snapshot/2020-01-01")
        );
        assert_eq!(result.entries()[1], MirrorEntry::new("other", "https://x"));
    }

    #[test]
    fn switch_on_empty_config_yields_single_cran_entry() {
        let mut cfg = MirrorConfig::default();
        switch_to_snapshot(&mut cfg, "2020-01-01", BASE, false).unwrap();
        assert_eq!(cfg.entries().len(), 1);
        assert_eq!(cfg.entries()[0].name, "CRAN");
    }

    #[test]
    fn switch_rejects_unsupported_scheme_without_touching_config() {
        let mut cfg = MirrorConfig::cran();
        let before = cfg.clone();
        let err = switch_to_snapshot(&mut cfg, "2020-01-01", "ftp://example.com", false)
            .unwrap_err();
        assert_eq!(
            err,
            SnapshotError::UnsupportedScheme("ftp://example.com".to_string())
        );
        assert_eq!(cfg, before);
    }

    #[test]
    fn switch_propagates_date_errors_without_touching_config() {
        let mut cfg = MirrorConfig::cran();
        let before = cfg.clone();
        let err = switch_to_snapshot(&mut cfg, "2014-09-16", BASE, false).unwrap_err();
        assert!(matches!(err, SnapshotError::TooEarly(_)));
        assert_eq!(cfg, before);
    }

    #[test]
    fn switch_is_idempotent() {
        let mut cfg = MirrorConfig::new(vec![
            MirrorEntry::new("CRAN", DEFAULT_CRAN_URL),
            MirrorEntry::new("other", "https://x"),
        ]);
        switch_to_snapshot(&mut cfg, "2020-01-01", BASE, false).unwrap();
        let once = cfg.clone();
        switch_to_snapshot(&mut cfg, "2020-01-01", BASE, false).unwrap();
        assert_eq!(cfg, once);
    }

    #[test]
    fn switch_accepts_file_scheme() {
        let mut cfg = MirrorConfig::cran();
        switch_to_snapshot(&mut cfg, "2020-01-01", "file:///srv/mran", false).unwrap();
        assert_eq!(cfg.entries()[0].url, "file:///srv/mran/snapshot/2020-01-01");
    }
}
