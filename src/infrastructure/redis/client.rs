use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use tracing::info;

use crate::infrastructure::store::{JobStore, StoreError};

/// Redis-backed [`JobStore`].
///
/// One multiplexed connection is opened at startup and cloned per command;
/// dropping the last clone closes it.
#[derive(Clone)]
pub struct RedisService {
    conn: MultiplexedConnection,
}

impl RedisService {
    pub async fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(connection_string)?;
        let mut conn = client.get_multiplexed_async_connection().await?;

        // Fail fast on a bad URL or unreachable server.
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Connected to Redis");
        Ok(Self { conn })
    }

    pub fn get_conn(&self) -> MultiplexedConnection {
        self.conn.clone()
    }
}

#[async_trait]
impl JobStore for RedisService {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.get_conn();
        // SET EX rejects 0, so clamp to one second.
        let seconds = ttl.as_secs().max(1);
        let _: () = conn.set_ex(key, value, seconds).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.get_conn();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}
