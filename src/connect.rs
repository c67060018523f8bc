use std::time::Duration;

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::{BoardError, BoardResult};

/// Backoff behavior for [`connect_with_policy`].
///
/// The default policy retries forever at a fixed one-second interval: no
/// exponential backoff, no circuit breaker. Tests substitute a bounded
/// policy with a millisecond interval.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Pause between attempts.
    pub interval: Duration,

    /// Give up after this many attempts; `None` retries indefinitely.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

/// Opens the database handle, retrying until it succeeds.
///
/// Blocks (asynchronously) until a connection is established and never
/// surfaces a failure to the caller; every failed attempt is logged and
/// followed by a fixed one-second pause. Meant to run once at startup,
/// before any request traffic exists.
///
/// The returned pool is the process-wide handle: created here, injected
/// into [`DocumentStore`](crate::store::DocumentStore), torn down only at
/// process exit.
pub async fn connect(url: &str) -> SqlitePool {
    match connect_with_policy(url, &RetryPolicy::default()).await {
        Ok(pool) => pool,
        // An unbounded policy loops until it succeeds.
        Err(err) => unreachable!("unbounded retry returned an error: {err}"),
    }
}

/// Opens the database handle under an explicit [`RetryPolicy`].
///
/// Returns [`BoardError::Connection`] once a bounded policy runs out of
/// attempts; with `max_attempts: None` this is [`connect`] and only ever
/// returns `Ok`.
pub async fn connect_with_policy(url: &str, policy: &RetryPolicy) -> BoardResult<SqlitePool> {
    let mut attempt: u32 = 0;

    loop {
        match SqlitePool::connect(url).await {
            Ok(pool) => {
                info!(url, "database connection established");
                return Ok(pool);
            }
            Err(err) => {
                attempt += 1;
                if let Some(max) = policy.max_attempts {
                    if attempt >= max {
                        return Err(BoardError::Connection(format!(
                            "giving up after {attempt} attempts: {err}"
                        )));
                    }
                }
                warn!(
                    url,
                    attempt,
                    error = %err,
                    "database connection failed, retrying in {:?}",
                    policy.interval
                );
                tokio::time::sleep(policy.interval).await;
            }
        }
    }
}
