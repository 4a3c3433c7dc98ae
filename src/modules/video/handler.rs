use super::dto::{GenerateVideoRequest, GenerateVideoResponse, JobStatusResponse};
use super::error::VideoError;
use super::service::VideoService;
use crate::common::response::{ApiError, ApiSuccess, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::error;

pub const JOB_NOT_FOUND: &str = "Job not found";

fn into_api_error(err: VideoError) -> ApiError {
    if err.status_code().is_server_error() {
        error!(error = %err, "Request failed");
    }
    ApiError::from(err)
}

/// Submit a video generation request
#[utoipa::path(
    post,
    path = "/api/generate-video",
    request_body = GenerateVideoRequest,
    responses(
        (status = 200, description = "Job finished", body = GenerateVideoResponse),
        (status = 400, description = "Prompt missing or body malformed", body = ErrorBody),
        (status = 500, description = "Job store unavailable", body = ErrorBody)
    ),
    tag = "Video"
)]
pub async fn generate_video(
    State(state): State<AppState>,
    payload: Result<Json<GenerateVideoRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => {
            return into_api_error(VideoError::InvalidBody(rejection.body_text())).into_response();
        }
    };

    match VideoService::generate(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => into_api_error(e).into_response(),
    }
}

/// Get the status of a job
///
/// Unknown and expired jobs both answer 200 with `{"error": "Job not found"}`.
#[utoipa::path(
    get,
    path = "/api/status/{id}",
    params(
        ("id" = String, Path, description = "Job ID, e.g. job_1700000000000")
    ),
    responses(
        (status = 200, description = "Job record, or an error body when the job is unknown", body = JobStatusResponse),
        (status = 500, description = "Job store unavailable", body = ErrorBody)
    ),
    tag = "Video"
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match VideoService::status(state, &id).await {
        Ok(Some(record)) => {
            ApiSuccess(JobStatusResponse::Found(record), StatusCode::OK).into_response()
        }
        Ok(None) => ApiSuccess(
            JobStatusResponse::NotFound(ErrorBody::new(JOB_NOT_FOUND)),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => into_api_error(e).into_response(),
    }
}
