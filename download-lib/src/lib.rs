mod backend;
pub mod browser;
mod error;
mod types;

pub use error::{DownloadError, DownloadLibResult};
pub use types::{DownloadEvent, DownloadReport};

use std::path::Path;

/// Default directory for downloaded artifacts, relative to the working
/// directory. Created on demand.
pub const DEFAULT_RESULTS_DIR: &str = "test-results";

/// Check whether a file is accessible at the given path.
///
/// Inaccessible (missing, or any metadata failure) is reported as
/// `false`, never as an error; both outcomes leave a diagnostic in the
/// logs.
pub async fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match tokio::fs::metadata(path).await {
        Ok(_) => {
            tracing::debug!("File exists at path: {}", path.display());
            true
        }
        Err(error) => {
            tracing::warn!(
                "File does not exist or cannot be accessed: {}: {}",
                path.display(),
                error
            );
            false
        }
    }
}

/// Download a file from a direct link and save it under `dest_dir`.
///
/// The filename is taken from the final path segment of the URL. A
/// non-success status fails immediately; nothing is retried. The body is
/// streamed to a temp file in the destination directory and only renamed
/// into place once the transfer completed, and the saved file must pass
/// the existence check before the report is returned.
pub async fn save_from_direct_link<F>(
    file_url: &str,
    dest_dir: Option<&Path>,
    mut on_event: F,
) -> DownloadLibResult<DownloadReport>
where
    F: FnMut(DownloadEvent) + Send,
{
    on_event(DownloadEvent::Starting {
        file_url: file_url.to_string(),
    });

    let url =
        reqwest::Url::parse(file_url).map_err(|e| DownloadError::InvalidUrl(e.to_string()))?;

    let filename = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            DownloadError::InvalidUrl("Could not extract filename from URL".to_string())
        })?
        .to_string();

    let dest_dir = dest_dir.unwrap_or_else(|| Path::new(DEFAULT_RESULTS_DIR));
    std::fs::create_dir_all(dest_dir)?;

    let (temp_file, bytes_downloaded) =
        backend::download_file_to_temp(file_url, dest_dir, &mut on_event).await?;

    let output_path = dest_dir.join(&filename);
    temp_file.persist(&output_path).map_err(|e| {
        DownloadError::Persist(format!(
            "Failed to move temp file to {:?}: {}",
            output_path, e
        ))
    })?;

    if !file_exists(&output_path).await {
        return Err(DownloadError::Persist(format!(
            "Saved file failed the existence check: {}",
            output_path.display()
        )));
    }

    on_event(DownloadEvent::FileSaved {
        path: output_path.clone(),
    });

    Ok(DownloadReport {
        file_path: output_path,
        bytes_downloaded,
    })
}
