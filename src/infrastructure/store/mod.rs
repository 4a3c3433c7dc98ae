//! Key-value storage for job records.
//!
//! The service only needs two operations from its store: an upsert that
//! (re)starts a per-key expiration, and a lookup. Anything implementing
//! [`JobStore`] can be injected into [`AppState`](crate::state::AppState).

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Upserts `value` under `key`, replacing any previous expiration with `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Returns the value under `key`, or `None` if it was never written or has expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}
