use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Error response from server: HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Failed to parse server response: {0}")]
    ResponseParse(#[from] serde_json::Error),
}

impl ClientError {
    /// The suite distinguishes "resource is gone" lookups from other
    /// failures, so the status code stays inspectable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::RequestFailed { status: 404, .. })
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
