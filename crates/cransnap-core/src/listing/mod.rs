//! Snapshot listing retrieval.
//!
//! Fetches the snapshot index at `<base>/snapshot` — a blocking GET via the
//! curl crate for http/https bases, a directory read for file bases — and
//! reduces the raw lines to date strings.

mod parse;

use std::fs;
use std::time::Duration;

use anyhow::Context;

use crate::error::SnapshotError;
use crate::snapshot_url::snapshot_url;

/// Returns the snapshot dates available under `base_url`.
///
/// Order is whatever the server or filesystem returned; callers must not
/// assume it is sorted. Fetch or read failures surface as
/// [`SnapshotError::HostUnreachable`]; a scheme other than http, https, or
/// file is [`SnapshotError::UnsupportedScheme`].
pub fn list_snapshots(base_url: &str) -> Result<Vec<String>, SnapshotError> {
    let index_url = snapshot_url(base_url, None);
    let unreachable = |e: anyhow::Error| SnapshotError::HostUnreachable {
        url: index_url.clone(),
        reason: format!("{e:#}"),
    };

    let lines = if base_url.starts_with("http://") || base_url.starts_with("https://") {
        let body = fetch_index_body(&index_url).map_err(unreachable)?;
        body.lines().map(str::to_string).collect()
    } else if base_url.starts_with("file://") {
        read_snapshot_dir(&index_url).map_err(unreachable)?
    } else {
        return Err(SnapshotError::UnsupportedScheme(base_url.to_string()));
    };

    let dates = parse::extract_dates(lines);
    tracing::debug!("{} snapshot dates listed at {index_url}", dates.len());
    Ok(dates)
}

/// Blocking GET of the snapshot index. Follows redirects.
fn fetch_index_body(index_url: &str) -> anyhow::Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(index_url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", index_url, code);
    }

    String::from_utf8(body).context("listing body is not UTF-8")
}

/// Lists entry names of the local snapshot directory behind a file URL.
fn read_snapshot_dir(index_url: &str) -> anyhow::Result<Vec<String>> {
    let parsed = url::Url::parse(index_url)
        .with_context(|| format!("invalid file URL: {index_url}"))?;
    let dir = parsed
        .to_file_path()
        .map_err(|_| anyhow::anyhow!("file URL has no local path: {index_url}"))?;

    let mut names = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("read dir: {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read dir entry: {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
