// SPDX-License-Identifier: MIT OR Apache-2.0
//! Client profile loading, validation, and merging.
//!
//! A [`ClientProfile`] controls how API calls are made and how their errors
//! are handled: response language, retry policy, and the region circuit
//! breaker. Profiles load from TOML, accept environment overrides, and can be
//! layered with [`merge_configs`].
#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tcvpc_retry::breaker::check_endpoint;
use tcvpc_retry::{Backoff, BreakerSettings, RetryPolicy};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during profile loading or validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The requested profile file could not be read.
    #[error("config file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: String,
    },

    /// The file could not be parsed as valid TOML.
    #[error("failed to parse config: {reason}")]
    ParseError {
        /// Human-readable parse error detail.
        reason: String,
    },

    /// Semantic validation failed (one or more problems).
    #[error("config validation failed: {reasons:?}")]
    ValidationError {
        /// Individual validation failure messages.
        reasons: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// Advisory-level issues that do not prevent operation but deserve attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A recommended optional field is missing.
    MissingOptionalField {
        /// Name of the missing field.
        field: String,
        /// Why it matters.
        hint: String,
    },
    /// A retry layer allows an unusually large number of attempts.
    LargeRetryCount {
        /// Which layer.
        layer: String,
        /// Configured retries.
        retries: u32,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::MissingOptionalField { field, hint } => {
                write!(f, "missing optional field '{field}': {hint}")
            }
            ConfigWarning::LargeRetryCount { layer, retries } => {
                write!(f, "{layer} retries set to {retries}; backoff may stall callers")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Client-side settings for calling the VPC API.
///
/// Every field is optional so profiles can be layered with
/// [`merge_configs`]; the accessors supply the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ClientProfile {
    /// Language of server error messages (`zh-CN` or `en-US`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Region requests are sent to, e.g. `ap-guangzhou`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Explicit API endpoint, e.g. `vpc.tencentcloudapi.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Log level override (e.g. `"debug"`, `"info"`, `"warn"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Log every retry and breaker decision at debug level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Turn the region circuit breaker off. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_region_breaker: Option<bool>,

    /// Retry policy; absent means no retries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryPolicy>,

    /// Region breaker tuning; absent means defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breaker: Option<BreakerSettings>,
}

impl ClientProfile {
    /// Effective message language.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Effective log level.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Whether debug logging was requested.
    pub fn is_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// Whether the region breaker should wrap requests.
    pub fn region_breaker_enabled(&self) -> bool {
        !self.disable_region_breaker.unwrap_or(true)
    }

    /// Effective retry policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default()
    }

    /// Effective breaker settings.
    pub fn breaker_settings(&self) -> BreakerSettings {
        self.breaker.clone().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "zh-CN";

/// Languages the API can answer in.
const VALID_LANGUAGES: &[&str] = &["zh-CN", "en-US"];

/// Recognised log levels.
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Retry counts above this produce a warning.
const LARGE_RETRY_THRESHOLD: u32 = 10;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a [`ClientProfile`] from an optional TOML file path.
///
/// * If `path` is `Some`, reads and parses the file.
/// * If `path` is `None`, returns [`ClientProfile::default()`].
///
/// Environment variable overrides are applied on top in both cases.
pub fn load_config(path: Option<&Path>) -> Result<ClientProfile, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p).map_err(|_| ConfigError::FileNotFound {
                path: p.display().to_string(),
            })?;
            parse_toml(&content)?
        }
        None => ClientProfile::default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Parse a TOML string into a [`ClientProfile`].
pub fn parse_toml(content: &str) -> Result<ClientProfile, ConfigError> {
    toml::from_str::<ClientProfile>(content).map_err(|e| ConfigError::ParseError {
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Env overrides
// ---------------------------------------------------------------------------

/// Apply environment variable overrides.
///
/// Recognised variables:
/// - `TCVPC_LANGUAGE`
/// - `TCVPC_REGION`
/// - `TCVPC_LOG_LEVEL`
/// - `TCVPC_DEBUG` (`1` or `true`)
/// - `TCVPC_BACKUP_ENDPOINT`
pub fn apply_env_overrides(config: &mut ClientProfile) {
    if let Ok(val) = std::env::var("TCVPC_LANGUAGE") {
        config.language = Some(val);
    }
    if let Ok(val) = std::env::var("TCVPC_REGION") {
        config.region = Some(val);
    }
    if let Ok(val) = std::env::var("TCVPC_LOG_LEVEL") {
        config.log_level = Some(val);
    }
    if let Ok(val) = std::env::var("TCVPC_DEBUG") {
        config.debug = Some(matches!(val.trim(), "1" | "true" | "TRUE" | "True"));
    }
    if let Ok(val) = std::env::var("TCVPC_BACKUP_ENDPOINT") {
        config
            .breaker
            .get_or_insert_with(BreakerSettings::default)
            .backup_endpoint = val;
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a parsed profile, returning advisory warnings.
///
/// Hard errors (unknown language, malformed endpoints, out-of-range breaker
/// settings) are returned as a [`ConfigError::ValidationError`]; soft issues
/// come back as warnings.
pub fn validate_config(config: &ClientProfile) -> Result<Vec<ConfigWarning>, ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<ConfigWarning> = Vec::new();

    if let Some(ref lang) = config.language
        && !VALID_LANGUAGES.contains(&lang.as_str())
    {
        errors.push(format!("invalid language '{lang}' (expected zh-CN or en-US)"));
    }

    if let Some(ref level) = config.log_level
        && !VALID_LOG_LEVELS.contains(&level.as_str())
    {
        errors.push(format!("invalid log_level '{level}'"));
    }

    if let Some(ref region) = config.region
        && region.split('-').count() < 2
    {
        errors.push(format!("invalid region '{region}'"));
    }

    if let Some(ref endpoint) = config.endpoint
        && !check_endpoint(endpoint)
    {
        errors.push(format!("invalid endpoint '{endpoint}'"));
    }

    if let Some(ref retry) = config.retry {
        for (layer, retries, backoff) in [
            (
                "network_failure",
                retry.network_failure_max_retries,
                &retry.network_failure_backoff,
            ),
            (
                "rate_limit",
                retry.rate_limit_max_retries,
                &retry.rate_limit_backoff,
            ),
        ] {
            if let Backoff::Constant { delay } = backoff
                && delay.is_zero()
                && retries > 0
            {
                errors.push(format!("{layer} backoff delay must be positive"));
            }
            if retries > LARGE_RETRY_THRESHOLD {
                warnings.push(ConfigWarning::LargeRetryCount {
                    layer: layer.into(),
                    retries,
                });
            }
        }
    }

    if let Some(ref breaker) = config.breaker {
        if breaker.max_fail_percentage > 100 {
            errors.push(format!(
                "breaker max_fail_percentage {} out of range (0..=100)",
                breaker.max_fail_percentage
            ));
        }
        if breaker.window.is_zero() {
            errors.push("breaker window must be positive".into());
        }
        if breaker.timeout.is_zero() {
            errors.push("breaker timeout must be positive".into());
        }
        if !check_endpoint(&format!("vpc.{}", breaker.backup_endpoint)) {
            errors.push(format!(
                "invalid breaker backup_endpoint '{}'",
                breaker.backup_endpoint
            ));
        }
    }

    if config.region_breaker_enabled() && config.region.is_none() {
        warnings.push(ConfigWarning::MissingOptionalField {
            field: "region".into(),
            hint: "the region breaker has no regional endpoint to protect".into(),
        });
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(ConfigError::ValidationError { reasons: errors })
    }
}

// ---------------------------------------------------------------------------
// Merging
// ---------------------------------------------------------------------------

/// Merge two profiles. Values in `overlay` take precedence over `base`.
pub fn merge_configs(base: ClientProfile, overlay: ClientProfile) -> ClientProfile {
    ClientProfile {
        language: overlay.language.or(base.language),
        region: overlay.region.or(base.region),
        endpoint: overlay.endpoint.or(base.endpoint),
        log_level: overlay.log_level.or(base.log_level),
        debug: overlay.debug.or(base.debug),
        disable_region_breaker: overlay.disable_region_breaker.or(base.disable_region_breaker),
        retry: overlay.retry.or(base.retry),
        breaker: overlay.breaker.or(base.breaker),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_profile_is_valid() {
        let cfg = ClientProfile::default();
        let warnings = validate_config(&cfg).expect("default profile should be valid");
        assert!(warnings.is_empty(), "breaker is off by default: {warnings:?}");
    }

    #[test]
    fn default_profile_accessors() {
        let cfg = ClientProfile::default();
        assert_eq!(cfg.language(), "zh-CN");
        assert_eq!(cfg.log_level(), "info");
        assert!(!cfg.is_debug());
        assert!(!cfg.region_breaker_enabled());
        assert!(!cfg.retry_policy().is_enabled());
        assert_eq!(cfg.breaker_settings(), BreakerSettings::default());
    }

    #[test]
    fn parse_full_profile() {
        let toml = r#"
            language = "en-US"
            region = "ap-shanghai"
            endpoint = "vpc.tencentcloudapi.com"
            disable_region_breaker = false

            [retry]
            network_failure_max_retries = 2
            rate_limit_max_retries = 3
            rate_limit_backoff = { kind = "constant", delay_ms = 500 }

            [breaker]
            max_fail_num = 10
            timeout_ms = 30000
        "#;
        let cfg = parse_toml(toml).unwrap();
        assert_eq!(cfg.language(), "en-US");
        assert!(cfg.region_breaker_enabled());
        let retry = cfg.retry_policy();
        assert_eq!(retry.network_failure_max_retries, 2);
        assert_eq!(retry.network_failure_backoff, Backoff::Exponential);
        assert_eq!(
            retry.rate_limit_backoff,
            Backoff::constant(Duration::from_millis(500))
        );
        let breaker = cfg.breaker_settings();
        assert_eq!(breaker.max_fail_num, 10);
        assert_eq!(breaker.max_fail_percentage, 75);
        assert_eq!(breaker.timeout, Duration::from_secs(30));
        validate_config(&cfg).unwrap();
    }

    #[test]
    fn parse_invalid_toml_gives_parse_error() {
        let err = parse_toml("this is [not valid toml =").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn parse_wrong_types_gives_parse_error() {
        let err = parse_toml("debug = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn validation_catches_invalid_language() {
        let cfg = ClientProfile {
            language: Some("fr-FR".into()),
            ..Default::default()
        };
        let err = validate_config(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn merge_overlay_wins() {
        let base = ClientProfile {
            region: Some("ap-beijing".into()),
            log_level: Some("warn".into()),
            ..Default::default()
        };
        let overlay = ClientProfile {
            log_level: Some("debug".into()),
            ..Default::default()
        };
        let merged = merge_configs(base, overlay);
        assert_eq!(merged.region.as_deref(), Some("ap-beijing"));
        assert_eq!(merged.log_level.as_deref(), Some("debug"));
        assert_eq!(merged.language(), "zh-CN");
    }

    #[test]
    fn merging_default_keeps_loaded_values() {
        let loaded = parse_toml("language = \"en-US\"\nlog_level = \"warn\"").unwrap();
        let merged = merge_configs(loaded.clone(), ClientProfile::default());
        assert_eq!(merged, loaded);
        assert_eq!(merged.language(), "en-US");
        assert_eq!(merged.log_level(), "warn");
    }

    #[test]
    fn default_profile_leaves_defaults_to_accessors() {
        let cfg = ClientProfile::default();
        assert!(cfg.language.is_none());
        assert!(cfg.log_level.is_none());
        assert_eq!(cfg.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn warning_display() {
        let w = ConfigWarning::LargeRetryCount {
            layer: "rate_limit".into(),
            retries: 20,
        };
        assert!(w.to_string().contains("rate_limit retries set to 20"));
    }
}
