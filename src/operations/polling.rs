//
//  cloudfoundry-client
//  operations/polling.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Fixed-interval polling with an overall deadline.
//!
//! [`poll_until`] fetches a snapshot, lets the caller inspect it, and either
//! stops or sleeps for the configured interval and fetches again. The whole
//! sequence runs under a single [`tokio::time::timeout`]:
//!
//! ```text
//! fetch -> inspect -> Done(value)            => Ok(value)
//!                  -> Continue -> sleep -> fetch ...
//!                  -> Err(e)                 => Err(e)
//! fetch fails                                => Err(e), no retry
//! deadline                                   => Err(OperationError::Timeout)
//! ```
//!
//! Fetches are strictly sequential. The interval is constant; there is no
//! backoff and no jitter. Dropping the returned future stops polling at once.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, warn};

use super::error::OperationError;

/// Default pause between two status queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default deadline for background jobs.
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Default deadline for application staging.
pub const DEFAULT_STAGING_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// Default deadline for application instances to start after staging.
pub const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Interval and deadline of one polling sequence.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use cloudfoundry_client::operations::PollConfig;
///
/// let config = PollConfig::default().with_timeout(Duration::from_secs(30));
/// assert_eq!(config.interval, Duration::from_secs(1));
/// assert_eq!(config.timeout, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Pause between the end of one query and the start of the next.
    pub interval: Duration,
    /// Deadline measured from the first query.
    pub timeout: Duration,
}

impl PollConfig {
    /// Creates a configuration with the given interval and deadline.
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Returns a copy with a different deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Returns a copy with a different interval.
    pub fn with_interval(self, interval: Duration) -> Self {
        Self { interval, ..self }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_JOB_TIMEOUT)
    }
}

/// One status check: the snapshot plus where in the sequence it was taken.
#[derive(Debug, Clone)]
pub struct PollAttempt<S> {
    /// The snapshot returned by the fetch.
    pub snapshot: S,
    /// 1-based attempt number.
    pub attempt: u32,
    /// Time since polling started.
    pub elapsed: Duration,
}

/// Decision taken after inspecting a [`PollAttempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep<T> {
    /// Stop polling and return the value.
    Done(T),
    /// Sleep for one interval and fetch again.
    Continue,
}

/// Polls until `inspect` returns [`PollStep::Done`] or an error, or the
/// deadline elapses.
///
/// # Parameters
///
/// * `config` - Interval and deadline
/// * `operation` - Name used in logs and in the timeout error, e.g. `Job 1234`
/// * `fetch` - Produces one snapshot; its errors end polling immediately
/// * `inspect` - Decides whether the snapshot is final
///
/// # Errors
///
/// Returns the first error from `fetch` or `inspect`, or
/// [`OperationError::Timeout`] if the deadline elapses first.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use cloudfoundry_client::operations::{poll_until, OperationError, PollConfig, PollStep};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), OperationError> {
/// let config = PollConfig::new(Duration::from_millis(1), Duration::from_secs(1));
/// let mut counter = 0;
///
/// let value = poll_until(
///     config,
///     "counter",
///     || {
///         counter += 1;
///         let current = counter;
///         async move { Ok::<_, OperationError>(current) }
///     },
///     |attempt| Ok(if attempt.snapshot >= 3 { PollStep::Done(attempt.snapshot) } else { PollStep::Continue }),
/// )
/// .await?;
///
/// assert_eq!(value, 3);
/// # Ok(())
/// # }
/// ```
pub async fn poll_until<S, T, F, Fut, I>(
    config: PollConfig,
    operation: &str,
    mut fetch: F,
    mut inspect: I,
) -> Result<T, OperationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<S, OperationError>>,
    I: FnMut(PollAttempt<S>) -> Result<PollStep<T>, OperationError>,
{
    let started = Instant::now();

    match timeout(
        config.timeout,
        poll_loop(config.interval, operation, started, &mut fetch, &mut inspect),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, timeout = ?config.timeout, "Gave up waiting");
            Err(OperationError::Timeout {
                operation: operation.to_string(),
                timeout: config.timeout,
            })
        }
    }
}

async fn poll_loop<S, T, F, Fut, I>(
    interval: Duration,
    operation: &str,
    started: Instant,
    fetch: &mut F,
    inspect: &mut I,
) -> Result<T, OperationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<S, OperationError>>,
    I: FnMut(PollAttempt<S>) -> Result<PollStep<T>, OperationError>,
{
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        let snapshot = fetch().await?;
        let elapsed = started.elapsed();

        match inspect(PollAttempt {
            snapshot,
            attempt,
            elapsed,
        })? {
            PollStep::Done(value) => {
                debug!(operation, attempt, ?elapsed, "Polling finished");
                return Ok(value);
            }
            PollStep::Continue => {
                debug!(operation, attempt, ?elapsed, "Not finished yet");
                sleep(interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::api::common::ApiError;

    fn counting_fetch(
        counter: Arc<AtomicU32>,
    ) -> impl FnMut() -> std::future::Ready<Result<u32, OperationError>> {
        move || std::future::ready(Ok(counter.fetch_add(1, Ordering::SeqCst) + 1))
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_done_and_reports_elapsed() {
        let counter = Arc::new(AtomicU32::new(0));
        let mut seen = Vec::new();

        let value = poll_until(
            PollConfig::new(Duration::from_secs(1), Duration::from_secs(60)),
            "test",
            counting_fetch(counter.clone()),
            |attempt| {
                seen.push((attempt.attempt, attempt.elapsed));
                Ok(if attempt.snapshot == 3 {
                    PollStep::Done("done")
                } else {
                    PollStep::Continue
                })
            },
        )
        .await
        .unwrap();

        assert_eq!(value, "done");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(
            seen,
            vec![
                (1, Duration::ZERO),
                (2, Duration::from_secs(1)),
                (3, Duration::from_secs(2)),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_stops_further_fetches() {
        let counter = Arc::new(AtomicU32::new(0));

        let error = poll_until(
            PollConfig::new(Duration::from_secs(1), Duration::from_millis(10_500)),
            "Job forever",
            counting_fetch(counter.clone()),
            |_| Ok(PollStep::<()>::Continue),
        )
        .await
        .unwrap_err();

        assert!(error.is_timeout());
        assert_eq!(error.to_string(), "Job forever timed out after 10s");

        let at_deadline = counter.load(Ordering::SeqCst);
        assert_eq!(at_deadline, 11);

        sleep(Duration::from_secs(30)).await;
        assert_eq!(counter.load(Ordering::SeqCst), at_deadline);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_error_is_not_retried() {
        let mut calls = 0;

        let error = poll_until(
            PollConfig::default(),
            "test",
            || {
                calls += 1;
                async { Err::<(), _>(OperationError::Request(ApiError::ServerError("boom".into()))) }
            },
            |_| Ok(PollStep::Done(())),
        )
        .await
        .unwrap_err();

        assert_eq!(calls, 1);
        assert!(matches!(error, OperationError::Request(ApiError::ServerError(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_inspect_error_ends_polling() {
        let counter = Arc::new(AtomicU32::new(0));

        let error = poll_until(
            PollConfig::default(),
            "test",
            counting_fetch(counter.clone()),
            |attempt| {
                if attempt.snapshot == 2 {
                    Err(OperationError::InvalidRequest("bad snapshot".into()))
                } else {
                    Ok(PollStep::<()>::Continue)
                }
            },
        )
        .await
        .unwrap_err();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(error.to_string(), "Invalid request: bad snapshot");
    }

    #[test]
    fn test_config_builders() {
        let config = PollConfig::default()
            .with_interval(Duration::from_millis(10))
            .with_timeout(Duration::from_secs(2));

        assert_eq!(config, PollConfig::new(Duration::from_millis(10), Duration::from_secs(2)));
        assert_eq!(PollConfig::default().timeout, DEFAULT_JOB_TIMEOUT);
    }
}
