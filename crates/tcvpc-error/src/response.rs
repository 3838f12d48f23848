// SPDX-License-Identifier: MIT OR Apache-2.0
//! Extraction of [`SdkError`]s from raw API response bodies.
//!
//! Current APIs wrap everything in a `Response` object:
//!
//! ```json
//! {"Response": {"Error": {"Code": "InvalidVpcId.NotFound", "Message": "..."}, "RequestId": "..."}}
//! ```
//!
//! Older APIs answer with a flat `{"code": 4000, "message": "...", "codeDesc": "..."}`.

use crate::{ClientErrorCode, SdkError};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(rename = "Response", default)]
    response: Option<EnvelopeBody>,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeBody {
    #[serde(rename = "Error", default)]
    error: Option<ErrorDetail>,
    #[serde(rename = "RequestId", default)]
    request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "Code", default)]
    code: Option<String>,
    #[serde(rename = "Message", default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DeprecatedEnvelope {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "codeDesc", default)]
    code_desc: Option<String>,
}

fn parse_json_error(body: &[u8], reason: &serde_json::Error) -> SdkError {
    SdkError::client(
        ClientErrorCode::ParseJsonError,
        format!(
            "Fail to parse json content: {}, because: {reason}",
            String::from_utf8_lossy(body)
        ),
    )
}

/// Inspect a response body and return the error it reports, if any.
///
/// `Ok(())` means the body carries no error; a JSON `null` counts as such.
/// Bodies that are not JSON, or are JSON but not an object, produce a
/// `ClientError.ParseJsonError`.
///
/// ```
/// use tcvpc_error::parse_error_response;
///
/// let body = br#"{"Response":{"Error":{"Code":"AuthFailure","Message":"bad sig"},"RequestId":"r-1"}}"#;
/// let err = parse_error_response(body).unwrap_err();
/// assert_eq!(err.code, "AuthFailure");
/// assert_eq!(err.request_id(), Some("r-1"));
/// ```
pub fn parse_error_response(body: &[u8]) -> Result<(), SdkError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| parse_json_error(body, &e))?;
    // `null` decodes to nothing; any other non-object cannot hold an envelope.
    let value = match value {
        serde_json::Value::Null => return Ok(()),
        v @ serde_json::Value::Object(_) => v,
        other => {
            let reason = <serde_json::Error as serde::de::Error>::invalid_type(
                unexpected(&other),
                &"a JSON object",
            );
            return Err(parse_json_error(body, &reason));
        }
    };

    let envelope: Envelope =
        serde_json::from_value(value.clone()).map_err(|e| parse_json_error(body, &e))?;
    let EnvelopeBody { error, request_id } = envelope.response.unwrap_or_default();
    let ErrorDetail { code, message } = error.unwrap_or_default();
    if let Some(code) = code.filter(|c| !c.is_empty()) {
        return Err(SdkError::new(code, message.unwrap_or_default())
            .with_request_id(request_id.unwrap_or_default()));
    }

    let deprecated: DeprecatedEnvelope =
        serde_json::from_value(value).map_err(|e| parse_json_error(body, &e))?;
    if let Some(legacy_code) = deprecated.code.filter(|c| *c != 0) {
        let err = SdkError::new(
            deprecated.code_desc.unwrap_or_default(),
            deprecated.message.unwrap_or_default(),
        );
        return Err(err.with_context("legacy_code", legacy_code));
    }
    Ok(())
}

fn unexpected(value: &serde_json::Value) -> serde::de::Unexpected<'_> {
    use serde::de::Unexpected;
    match value {
        serde_json::Value::Bool(b) => Unexpected::Bool(*b),
        serde_json::Value::Number(_) => Unexpected::Other("number"),
        serde_json::Value::String(s) => Unexpected::Str(s),
        serde_json::Value::Array(_) => Unexpected::Seq,
        serde_json::Value::Null | serde_json::Value::Object(_) => Unexpected::Other("value"),
    }
}

/// Reject any HTTP status other than 200.
pub fn check_http_status(status: u16, body: &[u8]) -> Result<(), SdkError> {
    if status == 200 {
        return Ok(());
    }
    Err(SdkError::client(
        ClientErrorCode::HttpStatusCodeError,
        format!(
            "Request fail with http status code: {status}, with body: {}",
            String::from_utf8_lossy(body)
        ),
    )
    .with_context("http_status", status))
}
