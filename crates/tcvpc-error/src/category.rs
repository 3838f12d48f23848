// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error-code families and dotted-code parsing.
//!
//! Tencent Cloud error codes are `Base` or `Base.SubReason`. The base names a
//! broad family shared across products (`InvalidParameterValue`,
//! `LimitExceeded`, ...) or, for older APIs, a product-specific condition
//! (`InvalidVpcId`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ErrorCategory
// ---------------------------------------------------------------------------

/// Broad family that an error code's base belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Signature or CAM authentication failure.
    AuthFailure,
    /// The operation was accepted but could not be carried out.
    FailedOperation,
    /// Server-side fault (`InternalError`, `InternalServerError`).
    InternalError,
    /// A parameter is malformed or not allowed in this context.
    InvalidParameter,
    /// A parameter value is out of range or otherwise rejected.
    InvalidParameterValue,
    /// A quota or limit was hit.
    LimitExceeded,
    /// A required parameter is absent.
    MissingParameter,
    /// The operation is denied for the caller or the resource state.
    OperationDenied,
    /// The resource is in use and cannot be changed.
    ResourceInUse,
    /// Not enough of a resource is available.
    ResourceInsufficient,
    /// The resource does not exist.
    ResourceNotFound,
    /// The resource exists but cannot currently be used.
    ResourceUnavailable,
    /// The caller lacks permission.
    UnauthorizedOperation,
    /// An unrecognised parameter was sent.
    UnknownParameter,
    /// The operation is not supported.
    UnsupportedOperation,
    /// API-level request throttling.
    RequestLimitExceeded,
    /// Generated on the client side, never by the server.
    Client,
    /// A product-specific base outside the common families.
    Product,
}

impl ErrorCategory {
    /// Every category, in declaration order.
    pub const ALL: &'static [ErrorCategory] = &[
        Self::AuthFailure,
        Self::FailedOperation,
        Self::InternalError,
        Self::InvalidParameter,
        Self::InvalidParameterValue,
        Self::LimitExceeded,
        Self::MissingParameter,
        Self::OperationDenied,
        Self::ResourceInUse,
        Self::ResourceInsufficient,
        Self::ResourceNotFound,
        Self::ResourceUnavailable,
        Self::UnauthorizedOperation,
        Self::UnknownParameter,
        Self::UnsupportedOperation,
        Self::RequestLimitExceeded,
        Self::Client,
        Self::Product,
    ];

    /// Classify the base half of a code.
    pub fn of_base(base: &str) -> Self {
        match base {
            "AuthFailure" => Self::AuthFailure,
            "FailedOperation" => Self::FailedOperation,
            "InternalError" | "InternalServerError" => Self::InternalError,
            "InvalidParameter" => Self::InvalidParameter,
            "InvalidParameterValue" => Self::InvalidParameterValue,
            "LimitExceeded" => Self::LimitExceeded,
            "MissingParameter" => Self::MissingParameter,
            "OperationDenied" => Self::OperationDenied,
            "ResourceInUse" => Self::ResourceInUse,
            "ResourceInsufficient" => Self::ResourceInsufficient,
            "ResourceNotFound" => Self::ResourceNotFound,
            "ResourceUnavailable" => Self::ResourceUnavailable,
            "UnauthorizedOperation" => Self::UnauthorizedOperation,
            "UnknownParameter" => Self::UnknownParameter,
            "UnsupportedOperation" => Self::UnsupportedOperation,
            "RequestLimitExceeded" => Self::RequestLimitExceeded,
            "ClientError" => Self::Client,
            _ => Self::Product,
        }
    }

    /// Classify a full code without validating it.
    pub fn of_code(code: &str) -> Self {
        let base = code.split_once('.').map_or(code, |(base, _)| base);
        Self::of_base(base)
    }

    /// Stable snake_case name, as used in serialised form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthFailure => "auth_failure",
            Self::FailedOperation => "failed_operation",
            Self::InternalError => "internal_error",
            Self::InvalidParameter => "invalid_parameter",
            Self::InvalidParameterValue => "invalid_parameter_value",
            Self::LimitExceeded => "limit_exceeded",
            Self::MissingParameter => "missing_parameter",
            Self::OperationDenied => "operation_denied",
            Self::ResourceInUse => "resource_in_use",
            Self::ResourceInsufficient => "resource_insufficient",
            Self::ResourceNotFound => "resource_not_found",
            Self::ResourceUnavailable => "resource_unavailable",
            Self::UnauthorizedOperation => "unauthorized_operation",
            Self::UnknownParameter => "unknown_parameter",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::RequestLimitExceeded => "request_limit_exceeded",
            Self::Client => "client",
            Self::Product => "product",
        }
    }

    /// Whether codes in this family originate from the server.
    pub fn is_server_side(&self) -> bool {
        !matches!(self, Self::Client)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`ErrorCategory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ErrorCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CodeParts
// ---------------------------------------------------------------------------

/// Reasons a string is not a well-formed error code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodePartsError {
    /// The code is the empty string.
    #[error("error code is empty")]
    Empty,
    /// One side of the `.` separator is empty.
    #[error("error code `{0}` has an empty segment")]
    EmptySegment(String),
    /// The code contains a character outside `[A-Za-z0-9_-]` and `.`.
    #[error("error code `{code}` contains invalid character {ch:?}")]
    InvalidChar {
        /// The offending code.
        code: String,
        /// First invalid character.
        ch: char,
    },
}

/// A code split into its base and optional sub-reason.
///
/// ```
/// use tcvpc_error::CodeParts;
///
/// let parts = CodeParts::parse("InvalidParameterValue.TooLong").unwrap();
/// assert_eq!(parts.base, "InvalidParameterValue");
/// assert_eq!(parts.sub, Some("TooLong"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParts<'a> {
    /// Family or product-specific base (before the first `.`).
    pub base: &'a str,
    /// Refinement after the first `.`, if any.
    pub sub: Option<&'a str>,
}

impl<'a> CodeParts<'a> {
    /// Split `code` on its first `.`.
    pub fn parse(code: &'a str) -> Result<Self, CodePartsError> {
        if code.is_empty() {
            return Err(CodePartsError::Empty);
        }
        if let Some(ch) = code
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(CodePartsError::InvalidChar {
                code: code.to_string(),
                ch,
            });
        }
        let (base, sub) = match code.split_once('.') {
            Some((base, sub)) => (base, Some(sub)),
            None => (code, None),
        };
        if base.is_empty() || sub.is_some_and(|s| s.is_empty() || s.split('.').any(str::is_empty)) {
            return Err(CodePartsError::EmptySegment(code.to_string()));
        }
        Ok(Self { base, sub })
    }

    /// Category of the base.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::of_base(self.base)
    }
}

impl fmt::Display for CodeParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub {
            Some(sub) => write!(f, "{}.{}", self.base, sub),
            None => f.write_str(self.base),
        }
    }
}

// ---------------------------------------------------------------------------
// ClientErrorCode
// ---------------------------------------------------------------------------

/// Codes the SDK generates itself when no usable server response exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientErrorCode {
    /// Invalid request construction (bad method, bad signature method).
    #[serde(rename = "ClientError")]
    Generic,
    /// A request was built from parameters of an unsupported type.
    #[serde(rename = "ClientError.InvalidParameter")]
    InvalidParameter,
    /// Transport failure after retries were exhausted.
    #[serde(rename = "ClientError.NetworkError")]
    NetworkError,
    /// The response body was not valid JSON.
    #[serde(rename = "ClientError.ParseJsonError")]
    ParseJsonError,
    /// The server answered with a non-200 status.
    #[serde(rename = "ClientError.HttpStatusCodeError")]
    HttpStatusCodeError,
    /// The region circuit breaker failed internally.
    #[serde(rename = "ClientError.CircuitBreakerError")]
    CircuitBreakerError,
}

impl ClientErrorCode {
    /// Wire form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "ClientError",
            Self::InvalidParameter => "ClientError.InvalidParameter",
            Self::NetworkError => "ClientError.NetworkError",
            Self::ParseJsonError => "ClientError.ParseJsonError",
            Self::HttpStatusCodeError => "ClientError.HttpStatusCodeError",
            Self::CircuitBreakerError => "ClientError.CircuitBreakerError",
        }
    }
}

impl fmt::Display for ClientErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_bases_map_to_families() {
        assert_eq!(ErrorCategory::of_base("AuthFailure"), ErrorCategory::AuthFailure);
        assert_eq!(
            ErrorCategory::of_base("InvalidParameterValue"),
            ErrorCategory::InvalidParameterValue
        );
        assert_eq!(
            ErrorCategory::of_base("UnsupportedOperation"),
            ErrorCategory::UnsupportedOperation
        );
    }

    #[test]
    fn internal_server_error_is_internal() {
        assert_eq!(
            ErrorCategory::of_base("InternalServerError"),
            ErrorCategory::InternalError
        );
    }

    #[test]
    fn product_specific_bases_are_product() {
        assert_eq!(ErrorCategory::of_base("InvalidVpcId"), ErrorCategory::Product);
        assert_eq!(
            ErrorCategory::of_base("AddressQuotaLimitExceeded"),
            ErrorCategory::Product
        );
    }

    #[test]
    fn of_code_ignores_sub_reason() {
        assert_eq!(
            ErrorCategory::of_code("LimitExceeded.AddressQuotaLimitExceeded"),
            ErrorCategory::LimitExceeded
        );
        assert_eq!(
            ErrorCategory::of_code("ClientError.NetworkError"),
            ErrorCategory::Client
        );
    }

    #[test]
    fn category_from_str_accepts_display_and_kebab() {
        for cat in ErrorCategory::ALL {
            assert_eq!(cat.to_string().parse::<ErrorCategory>().unwrap(), *cat);
        }
        assert_eq!(
            "resource-not-found".parse::<ErrorCategory>().unwrap(),
            ErrorCategory::ResourceNotFound
        );
        assert!("nope".parse::<ErrorCategory>().is_err());
    }

    #[test]
    fn category_serde_matches_display() {
        let json = serde_json::to_string(&ErrorCategory::LimitExceeded).unwrap();
        assert_eq!(json, r#""limit_exceeded""#);
    }

    #[test]
    fn parse_base_only() {
        let parts = CodeParts::parse("AuthFailure").unwrap();
        assert_eq!(parts.base, "AuthFailure");
        assert!(parts.sub.is_none());
        assert_eq!(parts.to_string(), "AuthFailure");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(CodeParts::parse(""), Err(CodePartsError::Empty));
        assert!(matches!(
            CodeParts::parse(".TooLong"),
            Err(CodePartsError::EmptySegment(_))
        ));
        assert!(matches!(
            CodeParts::parse("InvalidParameter."),
            Err(CodePartsError::EmptySegment(_))
        ));
        assert!(matches!(
            CodeParts::parse("Invalid Parameter"),
            Err(CodePartsError::InvalidChar { ch: ' ', .. })
        ));
    }

    #[test]
    fn client_codes_are_client_category() {
        for code in [
            ClientErrorCode::Generic,
            ClientErrorCode::InvalidParameter,
            ClientErrorCode::NetworkError,
            ClientErrorCode::ParseJsonError,
            ClientErrorCode::HttpStatusCodeError,
            ClientErrorCode::CircuitBreakerError,
        ] {
            assert_eq!(ErrorCategory::of_code(code.as_str()), ErrorCategory::Client);
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!(r#""{}""#, code.as_str()));
            assert!(!ErrorCategory::of_code(code.as_str()).is_server_side());
        }
    }

    #[test]
    fn only_client_family_is_client_side() {
        let client_side: Vec<_> = ErrorCategory::ALL
            .iter()
            .filter(|c| !c.is_server_side())
            .collect();
        assert_eq!(client_side, vec![&ErrorCategory::Client]);
        assert!(ErrorCategory::Product.is_server_side());
        assert!(ErrorCategory::InternalError.is_server_side());
    }
}
