use crate::types::DownloadEvent;
use crate::{DownloadError, DownloadLibResult};
use futures_util::stream::StreamExt;
use reqwest::Client;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const ONE_MEGABYTE: u64 = 1024 * 1024;

pub async fn download_file<F>(url: &str, on_event: &mut F) -> DownloadLibResult<Vec<u8>>
where
    F: FnMut(DownloadEvent) + Send,
{
    let mut buffer = Vec::new();
    download_file_to_writer(url, &mut buffer, on_event).await?;
    Ok(buffer)
}

/// Download into a temp file created inside `dir`, so the later rename
/// to the final name stays on one filesystem.
pub async fn download_file_to_temp<F>(
    url: &str,
    dir: &Path,
    on_event: &mut F,
) -> DownloadLibResult<(NamedTempFile, u64)>
where
    F: FnMut(DownloadEvent) + Send,
{
    let mut temp_file = NamedTempFile::new_in(dir)?;
    let bytes_downloaded = download_file_to_writer(url, &mut temp_file, on_event).await?;
    temp_file.flush()?;
    Ok((temp_file, bytes_downloaded))
}

async fn download_file_to_writer<W, F>(
    url: &str,
    writer: &mut W,
    on_event: &mut F,
) -> DownloadLibResult<u64>
where
    W: std::io::Write + Send,
    F: FnMut(DownloadEvent) + Send,
{
    let client = Client::new();
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let total_bytes = response.content_length();

    let mut bytes_downloaded = 0u64;
    let mut last_progress_emitted = 0u64;

    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let chunk_size = chunk.len() as u64;
        bytes_downloaded += chunk_size;

        writer.write_all(&chunk)?;

        if let Some(total) = total_bytes {
            let byte_milestone = bytes_downloaded >= last_progress_emitted + ONE_MEGABYTE;
            let percent_milestone =
                (bytes_downloaded * 10 / total) > (last_progress_emitted * 10 / total);

            if byte_milestone || percent_milestone {
                on_event(DownloadEvent::FileDownloadProgress {
                    bytes_downloaded,
                    total_bytes: Some(total),
                    chunk_size: chunk_size as usize,
                });
                last_progress_emitted = bytes_downloaded;
            }
        }
    }

    writer.flush()?;

    on_event(DownloadEvent::FileDownloadCompleted { bytes_downloaded });

    Ok(bytes_downloaded)
}
