use std::fmt;
use std::time::Duration;

use crate::config::env::{self, EnvKey, EnvSource, ProcessEnv};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_PIKA_API_URL: &str = "https://api.pika.art/v1/video";
pub const DEFAULT_FALLBACK_VIDEO_URL: &str = "https://samplelib.com/lib/preview/mp4/sample-5s.mp4";
pub const DEFAULT_JOB_TTL_SECS: u64 = 3600;
pub const DEFAULT_PIKA_TIMEOUT_SECS: u64 = 60;

/// Which [`JobStore`](crate::infrastructure::store::JobStore) backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("memory") {
            StoreBackend::Memory
        } else {
            StoreBackend::Redis
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub redis_url: String,
    pub store_backend: StoreBackend,
    pub job_ttl: Duration,
    pub pika_api_key: Option<String>,
    pub pika_api_url: String,
    pub pika_timeout: Duration,
    pub fallback_video_url: String,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &impl EnvSource) -> Self {
        Self {
            server_port: env::get_parsed(source, EnvKey::ServerPort, DEFAULT_PORT),
            redis_url: env::get_or(source, EnvKey::RedisUrl, DEFAULT_REDIS_URL),
            store_backend: StoreBackend::parse(&env::get_or(source, EnvKey::JobStore, "redis")),
            job_ttl: Duration::from_secs(env::get_parsed(
                source,
                EnvKey::JobTtlSecs,
                DEFAULT_JOB_TTL_SECS,
            )),
            pika_api_key: env::get(source, EnvKey::PikaApiKey),
            pika_api_url: env::get_or(source, EnvKey::PikaApiUrl, DEFAULT_PIKA_API_URL),
            pika_timeout: Duration::from_secs(env::get_parsed(
                source,
                EnvKey::PikaTimeoutSecs,
                DEFAULT_PIKA_TIMEOUT_SECS,
            )),
            fallback_video_url: env::get_or(
                source,
                EnvKey::FallbackVideoUrl,
                DEFAULT_FALLBACK_VIDEO_URL,
            ),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_source(&|_: &str| -> Option<String> { None })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("server_port", &self.server_port)
            .field("redis_url", &self.redis_url)
            .field("store_backend", &self.store_backend)
            .field("job_ttl", &self.job_ttl)
            .field(
                "pika_api_key",
                &self.pika_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("pika_api_url", &self.pika_api_url)
            .field("pika_timeout", &self.pika_timeout)
            .field("fallback_video_url", &self.fallback_video_url)
            .finish()
    }
}
