// SPDX-License-Identifier: MIT OR Apache-2.0
//! Retry and failover for Tencent Cloud API calls.
//!
//! Two retry layers wrap a request, innermost first:
//!
//! 1. **Network failure**: transient transport errors (timeouts, temporary
//!    failures) are retried, but only for idempotent requests.
//! 2. **Rate limit**: a response whose error code is `RequestLimitExceeded`
//!    is retried after a backoff.
//!
//! Neither layer sleeps after its last attempt. The [`breaker`] module adds a
//! per-region circuit breaker that fails over to a backup endpoint.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod breaker;

pub use breaker::{BreakerSettings, BreakerState, Permit, RegionBreaker};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};
use tcvpc_error::{ClientErrorCode, SdkError, parse_error_response};
use tracing::{debug, warn};

// ── Backoff ─────────────────────────────────────────────────────────

/// Delay schedule between attempts, indexed from zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backoff {
    /// `2^index` seconds.
    #[default]
    Exponential,
    /// The same delay every time.
    Constant {
        /// Delay between attempts.
        #[serde(rename = "delay_ms", with = "duration_millis")]
        #[schemars(with = "u64")]
        delay: Duration,
    },
}

impl Backoff {
    /// Shorthand for [`Backoff::Constant`].
    pub fn constant(delay: Duration) -> Self {
        Self::Constant { delay }
    }

    /// Delay to wait after the attempt with the given zero-based index.
    pub fn delay_for(&self, index: u32) -> Duration {
        match self {
            Self::Exponential => Duration::from_secs(2u64.saturating_pow(index)),
            Self::Constant { delay } => *delay,
        }
    }
}

/// Serde helper: `Duration` as integer milliseconds.
pub(crate) mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(val: &Duration, ser: S) -> Result<S::Ok, S::Error> {
        (val.as_millis() as u64).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        let ms: u64 = u64::deserialize(de)?;
        Ok(Duration::from_millis(ms))
    }
}

// ── Policy ──────────────────────────────────────────────────────────

/// How many times, and how patiently, to retry a request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RetryPolicy {
    /// Extra attempts after a transient network failure. `0` disables.
    pub network_failure_max_retries: u32,
    /// Delay schedule for network failure retries.
    pub network_failure_backoff: Backoff,
    /// Extra attempts after `RequestLimitExceeded`. `0` disables.
    pub rate_limit_max_retries: u32,
    /// Delay schedule for rate limit retries.
    pub rate_limit_backoff: Backoff,
}

impl RetryPolicy {
    /// Whether any retry layer is active.
    pub fn is_enabled(&self) -> bool {
        self.network_failure_max_retries > 0 || self.rate_limit_max_retries > 0
    }
}

// ── Metadata ────────────────────────────────────────────────────────

/// Which layer retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryKind {
    /// Transient transport failure.
    Network,
    /// Server-side throttling.
    RateLimit,
}

impl fmt::Display for RetryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::RateLimit => f.write_str("rate_limit"),
        }
    }
}

/// Record of a single failed attempt that was retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryAttempt {
    /// Layer that scheduled the retry.
    pub kind: RetryKind,
    /// Zero-indexed attempt number within that layer.
    pub attempt: u32,
    /// Error message from this attempt.
    pub error: String,
    /// Delay applied before the next attempt.
    #[serde(with = "duration_millis")]
    pub delay: Duration,
}

/// Metadata captured across all attempts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryMetadata {
    /// Number of times the underlying operation ran.
    pub total_attempts: u32,
    /// Retried attempts, in order.
    pub failed_attempts: Vec<RetryAttempt>,
    /// Wall-clock time spanning all attempts.
    #[serde(with = "duration_millis")]
    pub total_duration: Duration,
}

impl RetryMetadata {
    fn absorb(&mut self, inner: RetryMetadata) {
        self.total_attempts += inner.total_attempts;
        self.failed_attempts.extend(inner.failed_attempts);
    }
}

/// Result of a retry-enabled operation.
#[derive(Debug)]
pub struct RetryOutcome<T> {
    /// The successfully produced value.
    pub value: T,
    /// Retry metadata (empty `failed_attempts` when the first attempt succeeds).
    pub metadata: RetryMetadata,
}

// ── Transport errors ────────────────────────────────────────────────

/// Failure reported by the HTTP transport before any response was read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request timed out.
    #[error("timeout: {0}")]
    Timeout(String),
    /// A temporary failure such as a reset connection.
    #[error("temporary failure: {0}")]
    Temporary(String),
    /// Anything else; never retried.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Whether retrying may help.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Temporary(_))
    }
}

// ── Core retry loop ─────────────────────────────────────────────────

/// Generic retry loop. Calls `op` up to `max_retries + 1` times, sleeping
/// per `backoff` between attempts, and returns the first success together
/// with metadata about retried failures.
///
/// `retryable` decides whether a given error should trigger a retry. The
/// last attempt's error is returned as-is without sleeping.
pub async fn retry_async<T, E, F, Fut>(
    kind: RetryKind,
    max_retries: u32,
    backoff: &Backoff,
    mut op: F,
    retryable: impl Fn(&E) -> bool,
) -> Result<RetryOutcome<T>, E>
where
    E: fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let mut failed_attempts = Vec::new();
    let mut attempt = 0u32;

    loop {
        debug!(target: "tcvpc.retry", %kind, attempt, max_retries, "attempting request");

        match op().await {
            Ok(value) => {
                return Ok(RetryOutcome {
                    value,
                    metadata: RetryMetadata {
                        total_attempts: attempt + 1,
                        failed_attempts,
                        total_duration: start.elapsed(),
                    },
                });
            }
            Err(err) => {
                if attempt >= max_retries || !retryable(&err) {
                    return Err(err);
                }

                let delay = backoff.delay_for(attempt);
                warn!(
                    target: "tcvpc.retry",
                    %kind,
                    attempt,
                    max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "retrying request"
                );
                failed_attempts.push(RetryAttempt {
                    kind,
                    attempt,
                    error: err.to_string(),
                    delay,
                });
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

// ── Layers ──────────────────────────────────────────────────────────

/// Send with retry on transient transport failures.
///
/// Only `retryable` (idempotent) requests are retried. A transport error that
/// survives the retries becomes a `ClientError.NetworkError`.
pub async fn send_with_network_retry<T, F, Fut>(
    policy: &RetryPolicy,
    retryable: bool,
    op: F,
) -> Result<RetryOutcome<T>, SdkError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TransportError>>,
{
    let max_retries = if retryable {
        policy.network_failure_max_retries
    } else {
        0
    };
    retry_async(
        RetryKind::Network,
        max_retries,
        &policy.network_failure_backoff,
        op,
        TransportError::is_transient,
    )
    .await
    .map_err(|err| {
        SdkError::client(
            ClientErrorCode::NetworkError,
            format!("Fail to get response because {err}"),
        )
        .with_source(err)
    })
}

/// Send with both retry layers and return the response body.
///
/// Each body is checked with [`parse_error_response`]; a
/// `RequestLimitExceeded` answer is retried while attempts remain, any other
/// API error is returned immediately.
pub async fn send_with_rate_limit_retry<F, Fut>(
    policy: &RetryPolicy,
    retryable: bool,
    mut op: F,
) -> Result<RetryOutcome<Vec<u8>>, SdkError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<u8>, TransportError>>,
{
    let start = Instant::now();
    let max_retries = policy.rate_limit_max_retries;
    let mut metadata = RetryMetadata::default();
    let mut attempt = 0u32;

    loop {
        let sent = send_with_network_retry(policy, retryable, &mut op).await?;
        metadata.absorb(sent.metadata);
        let body = sent.value;

        match parse_error_response(&body) {
            Ok(()) => {
                metadata.total_duration = start.elapsed();
                return Ok(RetryOutcome {
                    value: body,
                    metadata,
                });
            }
            Err(err) if err.is_rate_limited() && attempt < max_retries => {
                let delay = policy.rate_limit_backoff.delay_for(attempt);
                warn!(
                    target: "tcvpc.retry",
                    attempt,
                    max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "rate limit exceeded, retrying"
                );
                metadata.failed_attempts.push(RetryAttempt {
                    kind: RetryKind::RateLimit,
                    attempt,
                    error: err.to_string(),
                    delay,
                });
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Retry an already-decoded call while it fails with `RequestLimitExceeded`.
pub async fn retry_rate_limited<T, F, Fut>(
    policy: &RetryPolicy,
    op: F,
) -> Result<RetryOutcome<T>, SdkError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SdkError>>,
{
    retry_async(
        RetryKind::RateLimit,
        policy.rate_limit_max_retries,
        &policy.rate_limit_backoff,
        op,
        SdkError::is_rate_limited,
    )
    .await
}
