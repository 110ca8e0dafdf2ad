use std::path::PathBuf;

/// Lifecycle notifications emitted while a download runs.
pub enum DownloadEvent {
    Starting {
        file_url: String,
    },
    FileDownloadProgress {
        bytes_downloaded: u64,
        total_bytes: Option<u64>,
        chunk_size: usize,
    },
    FileDownloadCompleted {
        bytes_downloaded: u64,
    },
    FileSaved {
        path: PathBuf,
    },
}

#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub file_path: PathBuf,
    pub bytes_downloaded: u64,
}
