use super::dto::{GenerateVideoRequest, GenerateVideoResponse};
use super::error::VideoError;
use super::model::JobRecord;
use super::repository::JobRepository;
use crate::infrastructure::pika::PikaVideoRequest;
use crate::state::AppState;
use tracing::{debug, info, warn};
use validator::Validate;

pub struct VideoService;

impl VideoService {
    /// Runs one job to completion: record it as processing, try the
    /// generator, fall back to the demo video, record it as done.
    pub async fn generate(
        state: AppState,
        req: GenerateVideoRequest,
    ) -> Result<GenerateVideoResponse, VideoError> {
        req.validate().map_err(|_| VideoError::MissingPrompt)?;
        let prompt = req.prompt.clone().ok_or(VideoError::MissingPrompt)?;

        let job_id = state.job_ids.next_id();
        let ttl = state.config.job_ttl;

        JobRepository::save(
            state.store.as_ref(),
            &job_id,
            &JobRecord::Processing {
                prompt: prompt.clone(),
            },
            ttl,
        )
        .await?;
        info!(job_id = %job_id, "Job created");

        let video_url = match Self::request_video(&state, &job_id, &prompt, &req).await {
            Some(url) => url,
            None => state.config.fallback_video_url.clone(),
        };

        JobRepository::save(
            state.store.as_ref(),
            &job_id,
            &JobRecord::Done {
                prompt,
                video_url: video_url.clone(),
            },
            ttl,
        )
        .await?;
        info!(job_id = %job_id, video_url = %video_url, "Job done");

        Ok(GenerateVideoResponse { job_id, video_url })
    }

    pub async fn status(state: AppState, job_id: &str) -> Result<Option<JobRecord>, VideoError> {
        JobRepository::find(state.store.as_ref(), job_id).await
    }

    async fn request_video(
        state: &AppState,
        job_id: &str,
        prompt: &str,
        req: &GenerateVideoRequest,
    ) -> Option<String> {
        let Some(pika) = state.pika.as_ref() else {
            debug!(job_id, source = "fallback", "No Pika credential configured");
            return None;
        };

        let request = PikaVideoRequest {
            prompt,
            duration: req.duration.as_ref(),
            aspect_ratio: req.ratio.as_ref(),
            style: req.style.as_ref(),
        };

        match pika.generate(&request).await {
            Ok(url) => {
                info!(job_id, source = "pika", "Video generated");
                Some(url)
            }
            Err(e) => {
                warn!(job_id, source = "fallback", error = %e, "Pika generation failed, using fallback video");
                None
            }
        }
    }
}
