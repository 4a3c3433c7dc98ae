use std::time::Duration;

use super::error::VideoError;
use super::model::JobRecord;
use crate::infrastructure::store::JobStore;

pub struct JobRepository;

impl JobRepository {
    pub async fn save(
        store: &dyn JobStore,
        job_id: &str,
        record: &JobRecord,
        ttl: Duration,
    ) -> Result<(), VideoError> {
        let payload = serde_json::to_string(record).map_err(VideoError::Encode)?;
        store.set(job_id, &payload, ttl).await?;
        Ok(())
    }

    pub async fn find(store: &dyn JobStore, job_id: &str) -> Result<Option<JobRecord>, VideoError> {
        let Some(raw) = store.get(job_id).await? else {
            return Ok(None);
        };

        let record = serde_json::from_str(&raw).map_err(VideoError::CorruptRecord)?;
        Ok(Some(record))
    }
}
