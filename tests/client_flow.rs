// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end flows across the workspace crates: a profile drives the retry
//! layers and breaker, and the errors they surface are classified against
//! the VPC code table.

use std::collections::VecDeque;
use std::sync::Mutex;
use tcvpc::codes::{VpcErrorCode, consts};
use tcvpc::config::{parse_toml, validate_config};
use tcvpc::error::ClientErrorCode;
use tcvpc::retry::breaker::send_with_region_breaker;
use tcvpc::retry::{BreakerState, RetryKind, TransportError, send_with_rate_limit_retry};
use tcvpc::{ErrorCategory, RegionBreaker, SdkError};

const PROFILE: &str = r#"
language = "en-US"
region = "ap-shanghai"
disable_region_breaker = false

[retry]
network_failure_max_retries = 2
rate_limit_max_retries = 2

[retry.network_failure_backoff]
kind = "constant"
delay_ms = 1

[retry.rate_limit_backoff]
kind = "constant"
delay_ms = 1
"#;

const RATE_LIMITED: &str =
    r#"{"Response":{"Error":{"Code":"RequestLimitExceeded","Message":"slow down"},"RequestId":"r1"}}"#;
const OK: &str = r#"{"Response":{"VpcSet":[],"RequestId":"r2"}}"#;
const NOT_FOUND: &str =
    r#"{"Response":{"Error":{"Code":"InvalidVpcId.NotFound","Message":"no such vpc"},"RequestId":"r3"}}"#;

/// Replays a fixed list of transport results, one per call.
struct Script(Mutex<VecDeque<Result<&'static str, TransportError>>>);

impl Script {
    fn new(steps: Vec<Result<&'static str, TransportError>>) -> Self {
        Self(Mutex::new(steps.into()))
    }

    async fn next(&self) -> Result<Vec<u8>, TransportError> {
        let step = self
            .0
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted");
        step.map(|body| body.as_bytes().to_vec())
    }

    fn remaining(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[tokio::test]
async fn profile_drives_both_retry_layers() {
    let profile = parse_toml(PROFILE).unwrap();
    assert!(validate_config(&profile).unwrap().is_empty());
    let policy = profile.retry_policy();

    let script = Script::new(vec![
        Err(TransportError::Timeout("read timed out".into())),
        Ok(RATE_LIMITED),
        Ok(OK),
    ]);
    let outcome = send_with_rate_limit_retry(&policy, true, || script.next())
        .await
        .unwrap();

    assert_eq!(outcome.value, OK.as_bytes());
    let kinds: Vec<RetryKind> = outcome
        .metadata
        .failed_attempts
        .iter()
        .map(|a| a.kind)
        .collect();
    assert_eq!(kinds, vec![RetryKind::Network, RetryKind::RateLimit]);
    assert_eq!(script.remaining(), 0);
}

#[tokio::test]
async fn product_error_is_classified_and_not_retried() {
    let policy = parse_toml(PROFILE).unwrap().retry_policy();
    let script = Script::new(vec![Ok(NOT_FOUND), Ok(OK)]);

    let err = send_with_rate_limit_retry(&policy, true, || script.next())
        .await
        .unwrap_err();

    assert_eq!(err.request_id(), Some("r3"));
    assert_eq!(VpcErrorCode::of(&err), Some(VpcErrorCode::InvalidVpcIdNotFound));
    assert_eq!(err.code, consts::INVALIDVPCID_NOTFOUND);
    assert_eq!(err.category(), ErrorCategory::Product);
    assert_eq!(script.remaining(), 1);
}

#[tokio::test]
async fn non_retryable_request_fails_with_network_error() {
    let policy = parse_toml(PROFILE).unwrap().retry_policy();
    let script = Script::new(vec![
        Err(TransportError::Temporary("connection reset".into())),
        Ok(OK),
    ]);

    let err = send_with_rate_limit_retry(&policy, false, || script.next())
        .await
        .unwrap_err();

    assert_eq!(err.code, ClientErrorCode::NetworkError.as_str());
    assert!(err.message.starts_with("Fail to get response because"));
    assert!(VpcErrorCode::of(&err).is_none());
}

#[tokio::test]
async fn breaker_fails_over_to_backup_after_repeated_network_errors() {
    let profile = parse_toml(PROFILE).unwrap();
    assert!(profile.region_breaker_enabled());
    let breaker = RegionBreaker::new(profile.breaker_settings());
    let domain = "vpc.ap-shanghai.tencentcloudapi.com";

    for _ in 0..5 {
        let result: Result<(), SdkError> =
            send_with_region_breaker(&breaker, "vpc", domain, |target| async move {
                assert_eq!(target, domain);
                Err(SdkError::client(ClientErrorCode::NetworkError, "down"))
            })
            .await;
        assert!(result.is_err());
    }
    assert_eq!(breaker.state(), BreakerState::Open);

    let used = send_with_region_breaker(&breaker, "vpc", domain, |target| async move {
        Ok::<_, SdkError>(target)
    })
    .await
    .unwrap();
    assert_eq!(used, "vpc.ap-guangzhou.tencentcloudapi.com");
}
