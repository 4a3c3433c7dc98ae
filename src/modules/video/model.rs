use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Persisted state of a generation job, stored as JSON under its job id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JobRecord {
    Processing {
        prompt: String,
    },
    Done {
        prompt: String,
        #[serde(rename = "videoUrl")]
        video_url: String,
    },
}

impl JobRecord {
    pub fn video_url(&self) -> Option<&str> {
        match self {
            JobRecord::Processing { .. } => None,
            JobRecord::Done { video_url, .. } => Some(video_url),
        }
    }
}

/// Issues `job_<unix-millis>` identifiers.
///
/// Values never repeat within a process: when the clock has not moved past
/// the last issued millisecond, the next id is `last + 1`.
#[derive(Debug, Default)]
pub struct JobIdGenerator {
    last: AtomicU64,
}

impl JobIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64;
        self.next_at(now_ms)
    }

    pub(crate) fn next_at(&self, now_ms: u64) -> String {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return format!("job_{}", candidate),
                Err(current) => last = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn processing_record_serializes_without_url() {
        let record = JobRecord::Processing {
            prompt: "a cat surfing".into(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "status": "processing", "prompt": "a cat surfing" })
        );
    }

    #[test]
    fn done_record_uses_camel_case_url() {
        let record = JobRecord::Done {
            prompt: "a cat surfing".into(),
            video_url: "https://cdn/x.mp4".into(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "status": "done", "prompt": "a cat surfing", "videoUrl": "https://cdn/x.mp4" })
        );
        assert_eq!(record.video_url(), Some("https://cdn/x.mp4"));
    }

    #[test]
    fn done_record_without_url_is_rejected() {
        let raw = r#"{"status":"done","prompt":"p"}"#;
        assert!(serde_json::from_str::<JobRecord>(raw).is_err());
    }

    #[test]
    fn ids_in_same_millisecond_are_distinct() {
        let ids = JobIdGenerator::new();
        let a = ids.next_at(1_700_000_000_000);
        let b = ids.next_at(1_700_000_000_000);
        assert_eq!(a, "job_1700000000000");
        assert_eq!(b, "job_1700000000001");
    }

    #[test]
    fn ids_follow_the_clock_when_it_advances() {
        let ids = JobIdGenerator::new();
        ids.next_at(1_000);
        assert_eq!(ids.next_at(5_000), "job_5000");
    }

    #[test]
    fn ids_never_go_backwards() {
        let ids = JobIdGenerator::new();
        ids.next_at(5_000);
        assert_eq!(ids.next_at(4_000), "job_5001");
    }

    #[test]
    fn next_id_uses_wall_clock_millis() {
        let before = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64;
        let id = JobIdGenerator::new().next_id();
        let millis: u64 = id.strip_prefix("job_").unwrap().parse().unwrap();
        assert!(millis >= before);
    }
}
