//! Integration test: local snapshot tree behind a file URL.
//!
//! Builds a `snapshot/<date>` directory tree in a tempdir, lists it through
//! the file branch of the lister, and runs a verified switch end-to-end.

use std::fs;

use cransnap_core::listing::list_snapshots;
use cransnap_core::mirrors::{MirrorConfig, MirrorEntry};
use cransnap_core::switch::switch_to_snapshot;
use cransnap_core::error::SnapshotError;
use tempfile::tempdir;

fn local_snapshot_tree(dates: &[&str]) -> (tempfile::TempDir, String) {
    let root = tempdir().expect("tempdir");
    let snap = root.path().join("snapshot");
    fs::create_dir(&snap).expect("create snapshot dir");
    for date in dates {
        fs::create_dir(snap.join(date)).expect("create dated dir");
    }
    let base = format!("file://{}", root.path().display());
    (root, base)
}

#[test]
fn lists_dates_from_local_tree() {
    let (_root, base) = local_snapshot_tree(&["2019-06-30", "2020-01-01"]);

    let mut dates = list_snapshots(&base).expect("list snapshots");
    dates.sort();
    assert_eq!(dates, vec!["2019-06-30", "2020-01-01"]);
}

#[test]
fn verified_switch_against_local_tree() {
    let (_root, base) = local_snapshot_tree(&["2020-01-01"]);

    let mut cfg = MirrorConfig::new(vec![
        MirrorEntry::new("CRAN", "https://cran.r-project.org"),
        MirrorEntry::new("other", "https://x"),
    ]);
    let result = switch_to_snapshot(&mut cfg, "2020-01-01", &base, true).expect("switch");

    assert_eq!(result.entries().len(), 2);
    assert_eq!(result.entries()[0].name, "CRAN");
    assert_eq!(
        result.entries()[0].url,
        format!("{base}/snapshot/2020-01-01")
    );
    assert_eq!(result.entries()[1], MirrorEntry::new("other", "https://x"));
}

#[test]
fn verified_switch_rejects_absent_date() {
    let (_root, base) = local_snapshot_tree(&["2020-01-01"]);

    let mut cfg = MirrorConfig::cran();
    let before = cfg.clone();
    let err = switch_to_snapshot(&mut cfg, "2020-01-02", &base, true).unwrap_err();
    assert_eq!(err, SnapshotError::NotFound("2020-01-02".to_string()));
    assert_eq!(cfg, before, "config must be untouched on failure");
}

#[test]
fn persisted_switch_survives_reload() {
    let (_root, base) = local_snapshot_tree(&["2020-01-01"]);
    let state = tempdir().expect("tempdir");
    let path = state.path().join("mirrors.toml");

    let mut cfg = MirrorConfig::cran();
    switch_to_snapshot(&mut cfg, "2020-01-01", &base, true).expect("switch");
    cfg.save_to_path(&path).expect("save");

    let reloaded = MirrorConfig::load_from_path(&path)
        .expect("load")
        .expect("file exists");
    assert_eq!(reloaded, cfg);
}
