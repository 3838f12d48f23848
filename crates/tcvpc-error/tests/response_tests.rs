// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tests for API error envelope parsing.

use tcvpc_error::{ErrorCategory, check_http_status, parse_error_response};

// ---------------------------------------------------------------------------
// Current envelope
// ---------------------------------------------------------------------------

#[test]
fn error_envelope_yields_sdk_error() {
    let body = br#"{
        "Response": {
            "Error": {"Code": "InvalidVpcId.NotFound", "Message": "vpc-abc not found"},
            "RequestId": "6ef60bec-0242-43af-bb20-270359fb54a7"
        }
    }"#;
    let err = parse_error_response(body).unwrap_err();
    assert_eq!(err.code, "InvalidVpcId.NotFound");
    assert_eq!(err.message, "vpc-abc not found");
    assert_eq!(
        err.request_id(),
        Some("6ef60bec-0242-43af-bb20-270359fb54a7")
    );
    assert_eq!(err.category(), ErrorCategory::Product);
    assert!(err.is_effective_response());
}

#[test]
fn success_envelope_is_ok() {
    let body = br#"{"Response": {"TotalCount": 0, "VpcSet": [], "RequestId": "r-1"}}"#;
    assert!(parse_error_response(body).is_ok());
}

#[test]
fn empty_code_is_not_an_error() {
    let body = br#"{"Response": {"Error": {"Code": "", "Message": ""}, "RequestId": "r-1"}}"#;
    assert!(parse_error_response(body).is_ok());
}

#[test]
fn null_error_field_is_tolerated() {
    let body = br#"{"Response": {"Error": null, "RequestId": null}}"#;
    assert!(parse_error_response(body).is_ok());
}

#[test]
fn rate_limit_is_detected() {
    let body = br#"{"Response": {"Error": {"Code": "RequestLimitExceeded", "Message": "throttled"}, "RequestId": "r-2"}}"#;
    let err = parse_error_response(body).unwrap_err();
    assert!(err.is_rate_limited());
}

#[test]
fn error_without_request_id_has_none() {
    let body = br#"{"Response": {"Error": {"Code": "InternalError", "Message": "x"}}}"#;
    let err = parse_error_response(body).unwrap_err();
    assert!(err.request_id().is_none());
    assert!(!err.is_effective_response());
}

// ---------------------------------------------------------------------------
// Deprecated envelope
// ---------------------------------------------------------------------------

#[test]
fn deprecated_envelope_uses_code_desc() {
    let body = br#"{"code": 4000, "message": "invalid vpc", "codeDesc": "InvalidVpc.NotExist"}"#;
    let err = parse_error_response(body).unwrap_err();
    assert_eq!(err.code, "InvalidVpc.NotExist");
    assert_eq!(err.message, "invalid vpc");
    assert!(err.request_id().is_none());
    assert_eq!(err.context["legacy_code"], serde_json::json!(4000));
}

#[test]
fn deprecated_zero_code_is_success() {
    let body = br#"{"code": 0, "message": "", "codeDesc": "Success", "data": {}}"#;
    assert!(parse_error_response(body).is_ok());
}

// ---------------------------------------------------------------------------
// Malformed bodies
// ---------------------------------------------------------------------------

#[test]
fn invalid_json_is_parse_json_error() {
    let err = parse_error_response(b"<html>502 Bad Gateway</html>").unwrap_err();
    assert_eq!(err.code, "ClientError.ParseJsonError");
    assert!(err.is_client_error());
    assert!(
        err.message
            .starts_with("Fail to parse json content: <html>502 Bad Gateway</html>, because: ")
    );
    assert!(err.request_id().is_none());
}

#[test]
fn array_body_is_parse_json_error() {
    for body in [&b"[]"[..], br#"[{"Response": {}}]"#] {
        let err = parse_error_response(body).unwrap_err();
        assert_eq!(err.code, "ClientError.ParseJsonError");
        assert!(err.message.contains("a JSON object"), "{}", err.message);
    }
}

#[test]
fn scalar_body_is_parse_json_error() {
    for body in [&br#""Response""#[..], b"42", b"true"] {
        let err = parse_error_response(body).unwrap_err();
        assert_eq!(err.code, "ClientError.ParseJsonError");
    }
}

#[test]
fn null_body_carries_no_error() {
    assert!(parse_error_response(b"null").is_ok());
}

#[test]
fn wrongly_typed_deprecated_code_is_parse_json_error() {
    let err = parse_error_response(br#"{"code": "oops"}"#).unwrap_err();
    assert_eq!(err.code, "ClientError.ParseJsonError");
}

// ---------------------------------------------------------------------------
// HTTP status
// ---------------------------------------------------------------------------

#[test]
fn status_200_passes() {
    assert!(check_http_status(200, b"{}").is_ok());
}

#[test]
fn non_200_status_is_client_error() {
    let err = check_http_status(503, b"unavailable").unwrap_err();
    assert_eq!(err.code, "ClientError.HttpStatusCodeError");
    assert_eq!(
        err.message,
        "Request fail with http status code: 503, with body: unavailable"
    );
    assert_eq!(err.context["http_status"], serde_json::json!(503));
}
