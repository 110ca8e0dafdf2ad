use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Client error: {0}")]
    Client(#[from] booking_client::ClientError),

    #[error("Download error: {0}")]
    Download(#[from] download_lib::DownloadError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Delete verification failed: {0}")]
    DeleteVerification(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
