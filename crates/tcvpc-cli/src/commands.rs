// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shared command implementations for the `tcvpc` CLI.
//!
//! These functions are library-level so they can be tested without
//! spawning the binary.

use anyhow::{Context, Result};
use schemars::schema_for;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tcvpc_codes::VpcErrorCode;
use tcvpc_config::{ClientProfile, ConfigError, load_config, validate_config};
use tcvpc_error::{CodeParts, ErrorCategory, SdkErrorDto, check_http_status, parse_error_response};

/// Everything known about one table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeInfo {
    /// Wire string.
    pub code: &'static str,
    /// Constant name in `tcvpc_codes::consts`.
    pub const_name: &'static str,
    /// Family of the base.
    pub category: ErrorCategory,
    /// Part before the `.`.
    pub base: &'static str,
    /// Part after the `.`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_code: Option<&'static str>,
    /// Vendor description.
    pub description: &'static str,
}

impl From<VpcErrorCode> for CodeInfo {
    fn from(code: VpcErrorCode) -> Self {
        Self {
            code: code.as_str(),
            const_name: code.const_name(),
            category: code.category(),
            base: code.base(),
            sub_code: code.sub_code(),
            description: code.description(),
        }
    }
}

/// Look up a code, failing if it is not in the table.
///
/// Well-formed unknown codes get a hint about their family.
pub fn lookup_code(code: &str) -> Result<CodeInfo> {
    if let Some(known) = VpcErrorCode::lookup(code) {
        return Ok(known.into());
    }
    match CodeParts::parse(code) {
        Ok(parts) => anyhow::bail!(
            "unknown VPC error code '{code}' (base '{}' is in category {})",
            parts.base,
            parts.category()
        ),
        Err(e) => Err(e).with_context(|| format!("unknown VPC error code '{code}'")),
    }
}

/// Table entries, optionally filtered by category and base.
pub fn list_codes(category: Option<ErrorCategory>, base: Option<&str>) -> Vec<CodeInfo> {
    VpcErrorCode::ALL
        .iter()
        .copied()
        .filter(|c| category.is_none_or(|cat| c.category() == cat))
        .filter(|c| base.is_none_or(|b| c.base() == b))
        .map(CodeInfo::from)
        .collect()
}

/// Number of table entries per category, skipping empty categories.
pub fn category_counts() -> BTreeMap<ErrorCategory, usize> {
    let mut counts = BTreeMap::new();
    for code in VpcErrorCode::ALL {
        *counts.entry(code.category()).or_insert(0) += 1;
    }
    counts
}

/// Classification of one API response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    /// `true` when the body carries no error.
    pub ok: bool,
    /// The reported error, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SdkErrorDto>,
    /// Table entry for the error code, if it is a known VPC code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known: Option<CodeInfo>,
    /// Whether the caller should retry after a backoff.
    pub rate_limited: bool,
    /// Whether the server gave a usable answer.
    pub effective: bool,
}

/// Classify a response body, after checking the HTTP status if given.
pub fn parse_response(body: &[u8], status: Option<u16>) -> ParseReport {
    let result = match status {
        Some(s) => check_http_status(s, body).and_then(|()| parse_error_response(body)),
        None => parse_error_response(body),
    };
    match result {
        Ok(()) => ParseReport {
            ok: true,
            error: None,
            known: None,
            rate_limited: false,
            effective: true,
        },
        Err(err) => ParseReport {
            ok: false,
            known: VpcErrorCode::of(&err).map(CodeInfo::from),
            rate_limited: err.is_rate_limited(),
            effective: err.is_effective_response(),
            error: Some(SdkErrorDto::from(&err)),
        },
    }
}

/// Read a response body from a file, or stdin when `path` is `None`.
pub fn read_body(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => std::fs::read(p).with_context(|| format!("read response file '{}'", p.display())),
        None => {
            let mut buf = Vec::new();
            std::io::Read::read_to_end(&mut std::io::stdin(), &mut buf).context("read stdin")?;
            Ok(buf)
        }
    }
}

/// Load and validate a profile.
///
/// Returns human-readable diagnostics (errors and warnings).
pub fn config_check(path: Option<&Path>) -> Result<Vec<String>> {
    let mut diagnostics = Vec::new();

    let config = match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            diagnostics.push(format!("error: {e}"));
            return Ok(diagnostics);
        }
    };

    match validate_config(&config) {
        Ok(warnings) => {
            for w in warnings {
                diagnostics.push(format!("warning: {w}"));
            }
        }
        Err(ConfigError::ValidationError { reasons }) => {
            for r in reasons {
                diagnostics.push(format!("error: {r}"));
            }
        }
        Err(other) => diagnostics.push(format!("error: {other}")),
    }

    Ok(diagnostics)
}

/// Effective profile rendered as TOML.
pub fn config_show(profile: &ClientProfile) -> Result<String> {
    toml::to_string_pretty(profile).context("serialize profile")
}

/// JSON schema of [`ClientProfile`].
pub fn schema_json() -> Result<String> {
    let value = serde_json::to_value(schema_for!(ClientProfile))?;
    serde_json::to_string_pretty(&value).context("serialize schema")
}
