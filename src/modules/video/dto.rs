use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use super::model::JobRecord;
use crate::common::response::ErrorBody;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateVideoRequest {
    #[validate(required, length(min = 1))]
    pub prompt: Option<String>,
    /// Forwarded to the generator as-is.
    #[schema(value_type = Option<Object>)]
    pub duration: Option<Value>,
    /// Forwarded to the generator as `aspect_ratio`.
    #[schema(value_type = Option<Object>)]
    pub ratio: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub style: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    pub job_id: String,
    pub video_url: String,
}

/// Body of `GET /api/status/{id}`: the stored record, or an error body
/// when the job is unknown or expired. Both are sent with 200.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum JobStatusResponse {
    Found(JobRecord),
    NotFound(ErrorBody),
}
