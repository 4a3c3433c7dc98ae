use axum::http::StatusCode;
use thiserror::Error;

use crate::common::response::ApiError;
use crate::infrastructure::store::StoreError;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("Prompt is required")]
    MissingPrompt,
    #[error("{0}")]
    InvalidBody(String),
    #[error("job store unavailable: {0}")]
    Store(#[from] StoreError),
    #[error("failed to encode job record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored job record is corrupt: {0}")]
    CorruptRecord(#[source] serde_json::Error),
}

impl VideoError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            VideoError::MissingPrompt | VideoError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            VideoError::Store(_) | VideoError::Encode(_) | VideoError::CorruptRecord(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<VideoError> for ApiError {
    fn from(err: VideoError) -> Self {
        ApiError(err.to_string(), err.status_code())
    }
}
