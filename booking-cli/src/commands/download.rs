use std::io::Write;
use std::path::Path;

use download_lib::{DownloadEvent, DownloadReport, save_from_direct_link};

use crate::error::Result;
use crate::output::DownloadOutput;

const ONE_MEGABYTE: f64 = (1024 * 1024) as f64;

/// Handle the download command.
///
/// Downloads a file from a direct link into the output directory,
/// reporting progress on the way.
pub async fn handle_download_command(
    file_url: &str,
    output_dir: Option<&Path>,
    json: bool,
) -> Result<DownloadReport> {
    let report = save_from_direct_link(file_url, output_dir, |event| {
        if json {
            return;
        }
        match event {
            DownloadEvent::Starting { file_url } => {
                println!("Starting download: {}", file_url);
            }
            DownloadEvent::FileDownloadProgress {
                bytes_downloaded,
                total_bytes,
                ..
            } => {
                if let Some(total) = total_bytes {
                    let percent = (bytes_downloaded as f64 / total as f64) * 100.0;
                    print!(
                        "\rProgress: {:.1}% ({:.2} MB / {:.2} MB)",
                        percent,
                        bytes_downloaded as f64 / ONE_MEGABYTE,
                        total as f64 / ONE_MEGABYTE
                    );
                    let _ = std::io::stdout().flush();
                }
            }
            DownloadEvent::FileDownloadCompleted { bytes_downloaded } => {
                println!(); // New line after progress
                println!(
                    "Download complete ({:.2} MB)",
                    bytes_downloaded as f64 / ONE_MEGABYTE
                );
            }
            DownloadEvent::FileSaved { path } => {
                println!("File saved to: {}", path.display());
            }
        }
    })
    .await?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&DownloadOutput {
                file_path: report.file_path.display().to_string(),
                bytes_downloaded: report.bytes_downloaded,
            })?
        );
    }

    Ok(report)
}
