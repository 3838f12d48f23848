// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tencent Cloud SDK error type and error-code vocabulary helpers.
//!
//! Every failed API call surfaces as an [`SdkError`]: the vendor's dotted
//! error code, a human-readable message, and the request id the server
//! assigned (absent for errors raised on the client side). Codes are grouped
//! into [`ErrorCategory`] families by their base, and raw response bodies are
//! turned into errors with [`parse_error_response`].

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod response;

pub use category::{ClientErrorCode, CodeParts, CodePartsError, ErrorCategory, UnknownCategory};
pub use response::{check_http_status, parse_error_response};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Code the API returns when a caller is throttled.
pub const CODE_REQUEST_LIMIT_EXCEEDED: &str = "RequestLimitExceeded";

/// Code of a server-side fault.
pub const CODE_INTERNAL_ERROR: &str = "InternalError";

// ---------------------------------------------------------------------------
// SdkError
// ---------------------------------------------------------------------------

/// Error returned by a Tencent Cloud API call.
///
/// # Builder usage
///
/// ```
/// use tcvpc_error::SdkError;
///
/// let err = SdkError::new("InvalidVpcId.NotFound", "vpc-123 does not exist")
///     .with_request_id("8b3e1f0a")
///     .with_context("vpc_id", "vpc-123");
/// assert_eq!(
///     err.to_string(),
///     "[TencentCloudSDKError] Code=InvalidVpcId.NotFound, Message=vpc-123 does not exist, RequestId=8b3e1f0a"
/// );
/// ```
pub struct SdkError {
    /// Vendor error code, e.g. `InvalidParameterValue.TooLong`.
    pub code: String,
    /// Human-readable description from the server or the client.
    pub message: String,
    /// Server-assigned request id; `None` for client-side errors.
    pub request_id: Option<String>,
    /// Optional underlying cause.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    /// Arbitrary structured context for diagnostics.
    pub context: BTreeMap<String, serde_json::Value>,
}

impl SdkError {
    /// Create a new error with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
            source: None,
            context: BTreeMap::new(),
        }
    }

    /// Create an error raised by the client itself.
    pub fn client(code: ClientErrorCode, message: impl Into<String>) -> Self {
        Self::new(code.as_str(), message)
    }

    /// Attach the server's request id. An empty id is treated as absent.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        let id = request_id.into();
        self.request_id = (!id.is_empty()).then_some(id);
        self
    }

    /// Attach a key-value pair to the diagnostic context.
    ///
    /// Values that fail to serialise are skipped.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.context.insert(key.into(), v);
        }
        self
    }

    /// Attach an underlying cause.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Request id, if the server assigned one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Family of this error's code.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::of_code(&self.code)
    }

    /// Base and sub-reason of the code, if it is well formed.
    pub fn parts(&self) -> Result<CodeParts<'_>, CodePartsError> {
        CodeParts::parse(&self.code)
    }

    /// Whether the server throttled the request.
    pub fn is_rate_limited(&self) -> bool {
        self.code == CODE_REQUEST_LIMIT_EXCEEDED
    }

    /// Whether the error was produced by the client rather than the server.
    pub fn is_client_error(&self) -> bool {
        !self.category().is_server_side()
    }

    /// Whether the server produced a usable answer: it assigned a request id
    /// and did not report an internal fault.
    pub fn is_effective_response(&self) -> bool {
        self.request_id.is_some() && self.code != CODE_INTERNAL_ERROR
    }
}

impl fmt::Debug for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("SdkError");
        d.field("code", &self.code);
        d.field("message", &self.message);
        if let Some(ref id) = self.request_id {
            d.field("request_id", id);
        }
        if let Some(ref src) = self.source {
            d.field("source", &src.to_string());
        }
        if !self.context.is_empty() {
            d.field("context", &self.context);
        }
        d.finish()
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[TencentCloudSDKError] Code={}, Message={}",
            self.code, self.message
        )?;
        if let Some(ref id) = self.request_id {
            write!(f, ", RequestId={id}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SdkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// ---------------------------------------------------------------------------
// Serialization support
// ---------------------------------------------------------------------------

/// Serialisable snapshot of an [`SdkError`] (without the opaque source).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SdkErrorDto {
    /// Error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Request id, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Family of the code.
    pub category: ErrorCategory,
    /// Structured context.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, serde_json::Value>,
    /// String representation of the source error, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_message: Option<String>,
}

impl From<&SdkError> for SdkErrorDto {
    fn from(err: &SdkError) -> Self {
        Self {
            code: err.code.clone(),
            message: err.message.clone(),
            request_id: err.request_id.clone(),
            category: err.category(),
            context: err.context.clone(),
            source_message: err.source.as_ref().map(|s| s.to_string()),
        }
    }
}

impl From<SdkErrorDto> for SdkError {
    fn from(dto: SdkErrorDto) -> Self {
        Self {
            code: dto.code,
            message: dto.message,
            request_id: dto.request_id,
            source: None,
            context: dto.context,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn basic_construction() {
        let err = SdkError::new("AuthFailure", "signature mismatch");
        assert_eq!(err.code, "AuthFailure");
        assert_eq!(err.message, "signature mismatch");
        assert!(err.request_id().is_none());
        assert!(err.source.is_none());
        assert!(err.context.is_empty());
    }

    #[test]
    fn display_without_request_id() {
        let err = SdkError::new("ClientError.NetworkError", "connection reset");
        assert_eq!(
            err.to_string(),
            "[TencentCloudSDKError] Code=ClientError.NetworkError, Message=connection reset"
        );
    }

    #[test]
    fn display_with_request_id() {
        let err = SdkError::new("InternalError", "oops").with_request_id("req-9");
        assert_eq!(
            err.to_string(),
            "[TencentCloudSDKError] Code=InternalError, Message=oops, RequestId=req-9"
        );
    }

    #[test]
    fn empty_request_id_is_absent() {
        let err = SdkError::new("InternalError", "oops").with_request_id("");
        assert!(err.request_id().is_none());
        assert!(!err.to_string().contains("RequestId"));
    }

    #[test]
    fn display_ignores_context() {
        let err = SdkError::new("AuthFailure", "x").with_context("region", "ap-beijing");
        assert_eq!(err.to_string(), "[TencentCloudSDKError] Code=AuthFailure, Message=x");
        assert!(format!("{err:?}").contains("ap-beijing"));
    }

    #[test]
    fn debug_with_source() {
        let src = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
        let err = SdkError::client(ClientErrorCode::NetworkError, "failed").with_source(src);
        let dbg = format!("{err:?}");
        assert!(dbg.contains("source"));
        assert!(dbg.contains("read timed out"));
    }

    #[test]
    fn std_error_source_chain() {
        let inner = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let err = SdkError::client(ClientErrorCode::NetworkError, "failed").with_source(inner);
        let src = std::error::Error::source(&err).unwrap();
        assert_eq!(src.to_string(), "reset");
    }

    #[test]
    fn classification_helpers() {
        let throttled = SdkError::new("RequestLimitExceeded", "slow down").with_request_id("r");
        assert!(throttled.is_rate_limited());
        assert_eq!(throttled.category(), ErrorCategory::RequestLimitExceeded);
        assert!(throttled.is_effective_response());
        assert!(!throttled.is_client_error());

        let client = SdkError::client(ClientErrorCode::ParseJsonError, "bad json");
        assert!(client.is_client_error());
        assert!(!client.is_effective_response());

        let internal = SdkError::new("InternalError", "boom").with_request_id("r");
        assert!(!internal.is_effective_response());
    }

    #[test]
    fn parts_of_dotted_code() {
        let err = SdkError::new("InvalidParameterValue.TooLong", "too long");
        let parts = err.parts().unwrap();
        assert_eq!(parts.base, "InvalidParameterValue");
        assert_eq!(parts.sub, Some("TooLong"));
        assert_eq!(parts.category(), ErrorCategory::InvalidParameterValue);
    }

    #[test]
    fn dto_roundtrip() {
        let err = SdkError::new("LimitExceeded", "quota")
            .with_request_id("abc")
            .with_context("quota", 20);
        let dto: SdkErrorDto = (&err).into();
        assert_eq!(dto.category, ErrorCategory::LimitExceeded);
        let json = serde_json::to_string(&dto).unwrap();
        let back: SdkErrorDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto, back);
        let rebuilt: SdkError = back.into();
        assert_eq!(rebuilt.request_id(), Some("abc"));
        assert_eq!(rebuilt.context["quota"], serde_json::json!(20));
    }

    #[test]
    fn dto_omits_empty_fields() {
        let err = SdkError::new("AuthFailure", "nope");
        let json = serde_json::to_value(SdkErrorDto::from(&err)).unwrap();
        assert!(json.get("request_id").is_none());
        assert!(json.get("context").is_none());
        assert!(json.get("source_message").is_none());
        assert_eq!(json["category"], "auth_failure");
    }
}
