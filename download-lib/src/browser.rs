//! Click-triggered downloads through a WebDriver session.
//!
//! WebDriver has no download event, so completion is detected on the
//! filesystem: snapshot the download directory, click, then wait for a
//! new file to appear and stop growing. The browser session must be
//! configured to download into the directory passed here.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thirtyfour::WebElement;

use crate::{DownloadError, DownloadLibResult, file_exists};

/// How long a click is given to produce a file in the download
/// directory before the operation fails.
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Trigger a download by clicking `element` and wait for the resulting
/// file under `download_dir`.
///
/// The saved file keeps the name the browser gave it unless `filename`
/// overrides it. The result must pass the existence check before it is
/// returned; a transfer that never lands surfaces as `Timeout`.
pub async fn download_by_click(
    element: &WebElement,
    download_dir: &Path,
    filename: Option<&str>,
) -> DownloadLibResult<PathBuf> {
    std::fs::create_dir_all(download_dir)?;
    let before = snapshot_dir(download_dir)?;

    element.click().await?;

    let downloaded = wait_for_new_file(download_dir, &before, DEFAULT_DOWNLOAD_TIMEOUT).await?;

    let saved = match filename {
        Some(name) => {
            let target = download_dir.join(name);
            tokio::fs::rename(&downloaded, &target).await?;
            target
        }
        None => downloaded,
    };

    if !file_exists(&saved).await {
        return Err(DownloadError::Persist(format!(
            "Downloaded file failed the existence check: {}",
            saved.display()
        )));
    }

    tracing::debug!("Download saved to {}", saved.display());
    Ok(saved)
}

fn snapshot_dir(dir: &Path) -> std::io::Result<HashSet<OsString>> {
    let mut names = HashSet::new();
    for entry in std::fs::read_dir(dir)? {
        names.insert(entry?.file_name());
    }
    Ok(names)
}

/// In-progress transfers carry a marker extension until the browser
/// renames them into place.
fn is_partial_download(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("crdownload" | "part" | "tmp" | "download")
    )
}

fn new_completed_entry(
    dir: &Path,
    before: &HashSet<OsString>,
) -> std::io::Result<Option<PathBuf>> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if before.contains(&entry.file_name()) {
            continue;
        }
        let path = entry.path();
        if entry.file_type()?.is_file() && !is_partial_download(&path) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Poll `dir` until a file absent from `before` shows up with a stable
/// size, or the deadline passes.
pub(crate) async fn wait_for_new_file(
    dir: &Path,
    before: &HashSet<OsString>,
    timeout: Duration,
) -> DownloadLibResult<PathBuf> {
    let deadline = tokio::time::Instant::now() + timeout;
    let mut last_seen: Option<(PathBuf, u64)> = None;

    loop {
        if let Some(path) = new_completed_entry(dir, before)?
            && let Ok(metadata) = std::fs::metadata(&path)
        {
            let size = metadata.len();
            // Two consecutive polls with the same size means the
            // transfer stopped growing
            match &last_seen {
                Some((seen_path, seen_size)) if *seen_path == path && *seen_size == size => {
                    return Ok(path);
                }
                _ => last_seen = Some((path, size)),
            }
        }

        if tokio::time::Instant::now() > deadline {
            return Err(DownloadError::Timeout {
                dir: dir.to_path_buf(),
                waited_secs: timeout.as_secs(),
            });
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
