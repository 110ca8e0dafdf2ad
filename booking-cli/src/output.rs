use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TokenOutput {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct BookingIdsOutput {
    pub count: usize,
    pub booking_ids: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub booking_id: u32,
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct DownloadOutput {
    pub file_path: String,
    pub bytes_downloaded: u64,
}

#[derive(Debug, Serialize)]
pub struct JsonError {
    pub error: String,
}
