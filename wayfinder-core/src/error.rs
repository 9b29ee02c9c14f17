use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid opening hours: {0}")]
    InvalidOpeningHours(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
