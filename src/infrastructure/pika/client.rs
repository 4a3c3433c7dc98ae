//! Client for the Pika text-to-video API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Every way a generation attempt can fail. Callers treat all of them the
/// same (fall back to the demo video), but they are logged distinctly.
#[derive(Debug, Error)]
pub enum PikaError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("response did not contain a video_url")]
    MissingVideoUrl,
}

impl From<reqwest::Error> for PikaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PikaError::Timeout
        } else if err.is_decode() {
            PikaError::Decode(err)
        } else {
            PikaError::Transport(err)
        }
    }
}

/// Outbound request body. Optional fields are forwarded untouched and
/// omitted when absent.
#[derive(Debug, Serialize)]
pub struct PikaVideoRequest<'a> {
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a Value>,
}

#[derive(Debug, Deserialize)]
struct PikaVideoResponse {
    #[serde(default)]
    video_url: Option<String>,
}

#[derive(Clone)]
pub struct PikaClient {
    api_key: String,
    endpoint: String,
    http: reqwest::Client,
}

impl PikaClient {
    pub fn new(api_key: String, endpoint: String, timeout: Duration) -> Result<Self, PikaError> {
        if api_key.trim().is_empty() {
            return Err(PikaError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()
            .map_err(PikaError::Transport)?;

        Ok(Self {
            api_key,
            endpoint,
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one generation request and returns the resulting video URL.
    /// Makes exactly one attempt.
    pub async fn generate(&self, request: &PikaVideoRequest<'_>) -> Result<String, PikaError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PikaError::UnexpectedStatus(status));
        }

        let body: PikaVideoResponse = response.json().await.map_err(|e| match e {
            e if e.is_timeout() => PikaError::Timeout,
            e => PikaError::Decode(e),
        })?;

        body.video_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(PikaError::MissingVideoUrl)
    }
}

impl std::fmt::Debug for PikaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PikaClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
