use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::pika::{PikaClient, PikaError};
use crate::infrastructure::store::JobStore;
use crate::modules::video::model::JobIdGenerator;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn JobStore>,
    /// `None` when no API key is configured; every job then uses the fallback video.
    pub pika: Option<PikaClient>,
    pub job_ids: Arc<JobIdGenerator>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn JobStore>) -> Result<Self, PikaError> {
        let pika = match &config.pika_api_key {
            Some(key) => Some(PikaClient::new(
                key.clone(),
                config.pika_api_url.clone(),
                config.pika_timeout,
            )?),
            None => None,
        };

        Ok(Self {
            config,
            store,
            pika,
            job_ids: Arc::new(JobIdGenerator::new()),
        })
    }
}
