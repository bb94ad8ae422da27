//! Redis-backed implementation of the vote consumer.
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use tracing::info;

use super::ConsumeVotes;
use crate::errors::ConsumerError;

/// The Redis list the producer pushes serialized ballots onto.
pub const DEFAULT_QUEUE_KEY: &str = "votes";

/// Consumes ballots from a Redis list with a blocking left-pop.
///
/// Holds a dedicated multiplexed connection; `BLPOP` parks that
/// connection, so it must not be shared with other commands.
pub struct RedisVoteConsumer {
    connection: ConnectionManager,
    queue_key: String,
}

impl RedisVoteConsumer {
    /// Connects to Redis and prepares a consumer for the given list key.
    ///
    /// # Returns
    ///
    /// * `Ok(RedisVoteConsumer)` - Connected and ready to pop
    /// * `Err(ConsumerError)` - The queue is unreachable; callers treat
    ///   this as fatal at startup
    pub async fn connect(
        redis_url: &str,
        queue_key: impl Into<String>,
    ) -> Result<Self, ConsumerError> {
        let client =
            redis::Client::open(redis_url).map_err(|e| ConsumerError::Connection(e.to_string()))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|e| ConsumerError::Connection(e.to_string()))?;
        info!("Connected to Redis");
        Ok(Self {
            connection,
            queue_key: queue_key.into(),
        })
    }
}

#[async_trait]
impl ConsumeVotes for RedisVoteConsumer {
    async fn next_payload(&mut self) -> Result<String, ConsumerError> {
        // A zero timeout blocks until an element arrives; absence of
        // votes is a normal idle state, so the wait is unbounded.
        let reply: Option<(String, String)> = redis::cmd("BLPOP")
            .arg(&self.queue_key)
            .arg(0)
            .query_async(&mut self.connection)
            .await
            .map_err(|e| ConsumerError::Pop(e.to_string()))?;

        match reply {
            Some((_, payload)) => Ok(payload),
            None => Err(ConsumerError::EmptyReply),
        }
    }
}
