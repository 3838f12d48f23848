// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-region circuit breaker with failover to a backup endpoint.
//!
//! While **closed**, outcomes are counted over a rolling window; too many
//! failures open the breaker. While **open**, requests are routed to the
//! backup endpoint until `timeout` elapses and the breaker turns
//! **half-open**. A half-open breaker reopens on the first failure and closes
//! once enough requests succeed.
//!
//! Every state change starts a new *generation*; outcomes reported against an
//! older generation are discarded.

use crate::duration_millis;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tcvpc_error::SdkError;
use tracing::{debug, warn};

/// Backup domain suffix used when no other is configured.
pub const DEFAULT_BACKUP_ENDPOINT: &str = "ap-guangzhou.tencentcloudapi.com";

/// Consecutive failures that open the breaker regardless of ratios.
const MAX_CONSECUTIVE_FAILURES: u32 = 5;

// ── Settings ────────────────────────────────────────────────────────

/// Tuning for a [`RegionBreaker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BreakerSettings {
    /// Domain suffix requests fail over to, prefixed with the service name.
    pub backup_endpoint: String,
    /// Minimum failures in a window before the ratio is considered.
    pub max_fail_num: u32,
    /// Failure percentage (0-100) that opens the breaker.
    pub max_fail_percentage: u32,
    /// Length of a closed-state counting window.
    #[serde(rename = "window_ms", with = "duration_millis")]
    #[schemars(with = "u64")]
    pub window: Duration,
    /// Time spent open before probing again.
    #[serde(rename = "timeout_ms", with = "duration_millis")]
    #[schemars(with = "u64")]
    pub timeout: Duration,
    /// Successes needed to close a half-open breaker. `0` closes on the
    /// first success.
    pub max_requests: u32,
}

impl Default for BreakerSettings {
    fn default() -> Self {
        Self {
            backup_endpoint: DEFAULT_BACKUP_ENDPOINT.to_string(),
            max_fail_num: 5,
            max_fail_percentage: 75,
            window: Duration::from_secs(60),
            timeout: Duration::from_secs(60),
            max_requests: 0,
        }
    }
}

// ── State ───────────────────────────────────────────────────────────

/// Breaker position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakerState {
    /// Requests go to the regional endpoint.
    Closed,
    /// Probing the regional endpoint after an open period.
    HalfOpen,
    /// Requests go to the backup endpoint.
    Open,
}

impl fmt::Display for BreakerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Closed => "closed",
            Self::HalfOpen => "half_open",
            Self::Open => "open",
        };
        f.write_str(s)
    }
}

/// Handed out before a request; returned with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permit {
    /// Generation the request started in.
    pub generation: u64,
    /// State observed when the request started.
    pub state: BreakerState,
}

impl Permit {
    /// Whether the request should fail over to the backup endpoint.
    pub fn is_open(&self) -> bool {
        self.state == BreakerState::Open
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Counter {
    all: u32,
    failures: u32,
    consecutive_successes: u32,
    consecutive_failures: u32,
}

impl Counter {
    fn on_success(&mut self) {
        self.all += 1;
        self.consecutive_successes += 1;
        self.consecutive_failures = 0;
    }

    fn on_failure(&mut self) {
        self.all += 1;
        self.failures += 1;
        self.consecutive_failures += 1;
        self.consecutive_successes = 0;
    }
}

#[derive(Debug)]
struct Inner {
    state: BreakerState,
    generation: u64,
    /// `None` means "already expired" while closed and "never" while half-open.
    expiry: Option<Instant>,
    counter: Counter,
}

// ── Breaker ─────────────────────────────────────────────────────────

/// Thread-safe circuit breaker for one region.
///
/// Methods ending in `_at` take the current time explicitly; the others use
/// [`Instant::now`].
#[derive(Debug)]
pub struct RegionBreaker {
    settings: BreakerSettings,
    inner: Mutex<Inner>,
}

impl Default for RegionBreaker {
    fn default() -> Self {
        Self::new(BreakerSettings::default())
    }
}

impl RegionBreaker {
    /// Create a closed breaker.
    pub fn new(settings: BreakerSettings) -> Self {
        Self {
            settings,
            inner: Mutex::new(Inner {
                state: BreakerState::Closed,
                generation: 0,
                expiry: None,
                counter: Counter::default(),
            }),
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &BreakerSettings {
        &self.settings
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current state.
    pub fn state(&self) -> BreakerState {
        self.state_at(Instant::now())
    }

    /// State at `now`, applying any pending expiry.
    pub fn state_at(&self, now: Instant) -> BreakerState {
        let mut inner = self.lock();
        self.current(&mut inner, now);
        inner.state
    }

    /// Register the start of a request.
    pub fn before_request(&self) -> Permit {
        self.before_request_at(Instant::now())
    }

    /// Register the start of a request at `now`.
    pub fn before_request_at(&self, now: Instant) -> Permit {
        let mut inner = self.lock();
        self.current(&mut inner, now);
        Permit {
            generation: inner.generation,
            state: inner.state,
        }
    }

    /// Report a request's outcome.
    pub fn after_request(&self, permit: Permit, success: bool) {
        self.after_request_at(permit, success, Instant::now());
    }

    /// Report a request's outcome at `now`.
    pub fn after_request_at(&self, permit: Permit, success: bool, now: Instant) {
        let mut inner = self.lock();
        self.current(&mut inner, now);
        if inner.generation != permit.generation {
            debug!(
                target: "tcvpc.breaker",
                stale = permit.generation,
                current = inner.generation,
                "discarding outcome from earlier generation"
            );
            return;
        }
        if success {
            self.on_success(&mut inner, now);
        } else {
            self.on_failure(&mut inner, now);
        }
    }

    /// Report the result of a request, counting it as a success when the
    /// call succeeded or the server gave an effective answer.
    pub fn record<T>(&self, permit: Permit, result: &Result<T, SdkError>) {
        let success = match result {
            Ok(_) => true,
            Err(err) => err.is_effective_response(),
        };
        self.after_request(permit, success);
    }

    /// Start a request for `service` and pick the domain to send it to.
    pub fn route(&self, service: &str, domain: &str) -> (Permit, String) {
        let permit = self.before_request();
        if permit.is_open() {
            let backup = format!("{service}.{}", self.settings.backup_endpoint);
            warn!(
                target: "tcvpc.breaker",
                service,
                domain,
                backup = %backup,
                "breaker open, failing over to backup endpoint"
            );
            (permit, backup)
        } else {
            (permit, domain.to_string())
        }
    }

    fn current(&self, inner: &mut Inner, now: Instant) {
        let expired = inner.expiry.is_none_or(|expiry| expiry < now);
        match inner.state {
            BreakerState::Closed if expired => self.new_generation(inner, now),
            BreakerState::Open if expired => self.set_state(inner, BreakerState::HalfOpen, now),
            _ => {}
        }
    }

    fn set_state(&self, inner: &mut Inner, state: BreakerState, now: Instant) {
        if inner.state == state {
            return;
        }
        debug!(target: "tcvpc.breaker", from = %inner.state, to = %state, "breaker state change");
        inner.state = state;
        self.new_generation(inner, now);
    }

    fn new_generation(&self, inner: &mut Inner, now: Instant) {
        inner.generation += 1;
        inner.counter = Counter::default();
        inner.expiry = match inner.state {
            BreakerState::Closed => Some(now + self.settings.window),
            BreakerState::Open => Some(now + self.settings.timeout),
            BreakerState::HalfOpen => None,
        };
    }

    fn ready_to_open(&self, c: &Counter) -> bool {
        let ratio_hit = c.all > 0
            && c.failures >= self.settings.max_fail_num
            && u64::from(c.failures) * 100
                >= u64::from(self.settings.max_fail_percentage) * u64::from(c.all);
        ratio_hit || c.consecutive_failures > MAX_CONSECUTIVE_FAILURES
    }

    fn on_success(&self, inner: &mut Inner, now: Instant) {
        match inner.state {
            BreakerState::Closed => inner.counter.on_success(),
            BreakerState::HalfOpen => {
                inner.counter.on_success();
                let c = inner.counter;
                if c.all - c.failures >= self.settings.max_requests {
                    self.set_state(inner, BreakerState::Closed, now);
                }
            }
            BreakerState::Open => {}
        }
    }

    fn on_failure(&self, inner: &mut Inner, now: Instant) {
        match inner.state {
            BreakerState::Closed => {
                inner.counter.on_failure();
                if self.ready_to_open(&inner.counter) {
                    warn!(
                        target: "tcvpc.breaker",
                        failures = inner.counter.failures,
                        all = inner.counter.all,
                        "opening breaker"
                    );
                    self.set_state(inner, BreakerState::Open, now);
                }
            }
            BreakerState::HalfOpen => self.set_state(inner, BreakerState::Open, now),
            BreakerState::Open => {}
        }
    }
}

/// Send one request through the breaker.
///
/// `op` receives the domain to use (regional or backup) and its result is
/// recorded before being returned.
pub async fn send_with_region_breaker<T, F, Fut>(
    breaker: &RegionBreaker,
    service: &str,
    domain: &str,
    op: F,
) -> Result<T, SdkError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, SdkError>>,
{
    let (permit, target) = breaker.route(service, domain);
    let result = op(target).await;
    breaker.record(permit, &result);
    result
}

// ── Endpoint helpers ────────────────────────────────────────────────

/// Whether `endpoint` looks like `service[.region].tencentcloudapi.com`.
///
/// ```
/// use tcvpc_retry::breaker::check_endpoint;
///
/// assert!(check_endpoint("vpc.tencentcloudapi.com"));
/// assert!(check_endpoint("vpc.ap-shanghai.tencentcloudapi.com"));
/// assert!(!check_endpoint("vpc.tencentcloud.com"));
/// ```
pub fn check_endpoint(endpoint: &str) -> bool {
    let parts: Vec<&str> = endpoint.split('.').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return false;
    }
    if parts[parts.len() - 2] != "tencentcloudapi" {
        return false;
    }
    !(parts.len() == 4 && parts[1].split('-').count() < 2)
}

/// Put `region` into a `service[.region].tencentcloudapi.com` domain.
pub fn renew_endpoint(domain: &str, region: &str) -> String {
    let mut parts: Vec<&str> = domain.split('.').collect();
    match parts.len() {
        3 => parts.insert(1, region),
        4 => parts[1] = region,
        _ => {}
    }
    parts.join(".")
}
