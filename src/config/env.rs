use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    RedisUrl,
    JobStore,
    JobTtlSecs,
    PikaApiKey,
    PikaApiUrl,
    PikaTimeoutSecs,
    FallbackVideoUrl,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "PORT",
            EnvKey::RedisUrl => "REDIS_URL",
            EnvKey::JobStore => "JOB_STORE",
            EnvKey::JobTtlSecs => "JOB_TTL_SECS",
            EnvKey::PikaApiKey => "PIKA_API_KEY",
            EnvKey::PikaApiUrl => "PIKA_API_URL",
            EnvKey::PikaTimeoutSecs => "PIKA_TIMEOUT_SECS",
            EnvKey::FallbackVideoUrl => "FALLBACK_VIDEO_URL",
        }
    }
}

/// Source of configuration values. The process environment in production,
/// a map in tests.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Returns the value for `key`, treating an empty string as unset.
pub fn get(source: &impl EnvSource, key: EnvKey) -> Option<String> {
    source.var(key.as_str()).filter(|v| !v.trim().is_empty())
}

pub fn get_or(source: &impl EnvSource, key: EnvKey, default: &str) -> String {
    get(source, key).unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<T: FromStr>(source: &impl EnvSource, key: EnvKey, default: T) -> T {
    match get(source, key) {
        Some(val) => val.trim().parse::<T>().unwrap_or(default),
        None => default,
    }
}
