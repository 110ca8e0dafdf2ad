use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to persist file: {0}")]
    Persist(String),

    #[error("Timed out after {waited_secs}s waiting for a download in {}", dir.display())]
    Timeout { dir: PathBuf, waited_secs: u64 },

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}

pub type DownloadLibResult<T> = std::result::Result<T, DownloadError>;
