// SPDX-License-Identifier: MIT OR Apache-2.0
//! Table-level checks for the VPC error codes.

use std::collections::BTreeMap;
use tcvpc_codes::{VpcErrorCode, consts};
use tcvpc_error::{ErrorCategory, SdkError, parse_error_response};

// ---------------------------------------------------------------------------
// Wire strings
// ---------------------------------------------------------------------------

#[test]
fn selected_constants_match_vendor_strings() {
    assert_eq!(consts::AUTHFAILURE, "AuthFailure");
    assert_eq!(consts::INVALIDPARAMETERVALUE_TOOLONG, "InvalidParameterValue.TooLong");
    assert_eq!(consts::INVALIDSECURITYGROUPID_NOTFOUND, "InvalidSecurityGroupID.NotFound");
    assert_eq!(
        consts::LIMITEXCEEDED_ADDRESSQUOTALIMITEXCEEDED,
        "LimitExceeded.AddressQuotaLimitExceeded"
    );
    assert_eq!(
        consts::UNSUPPORTEDOPERATION_VERSIONMISMATCH,
        "UnsupportedOperation.VersionMismatch"
    );
    assert_eq!(consts::VPCLIMITEXCEEDED, "VpcLimitExceeded");
}

const VENDOR_TABLE: &str = include_str!("fixtures/vpc_errors.txt");

fn vendor_entries() -> Vec<(&'static str, &'static str)> {
    VENDOR_TABLE
        .lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .map(|l| {
            let (name, value) = l.split_once(" = ").expect("NAME = \"Value\"");
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .expect("quoted value");
            (name, value)
        })
        .collect()
}

#[test]
fn every_code_matches_vendor_table() {
    let vendor = vendor_entries();
    assert_eq!(vendor.len(), VpcErrorCode::COUNT);
    for (code, (name, value)) in VpcErrorCode::ALL.iter().zip(&vendor) {
        assert_eq!(code.const_name(), *name, "constant name for {value}");
        assert_eq!(code.as_str(), *value, "wire string for {name}");
        assert_eq!(VpcErrorCode::lookup(value), Some(*code));
    }
}

#[test]
fn descriptions_are_kept_verbatim() {
    assert_eq!(VpcErrorCode::InvalidAddressIdNotFound.description(), " 指定的EIP不存在。");
}

#[test]
fn enum_and_constants_agree() {
    assert_eq!(VpcErrorCode::InvalidVpcIdNotFound.as_str(), consts::INVALIDVPCID_NOTFOUND);
    assert_eq!(VpcErrorCode::InvalidVpcIdNotFound.const_name(), "INVALIDVPCID_NOTFOUND");
    assert_eq!(VpcErrorCode::MissingParameter.as_str(), consts::MISSINGPARAMETER);
}

#[test]
fn table_order_starts_and_ends_as_published() {
    assert_eq!(VpcErrorCode::ALL.first(), Some(&VpcErrorCode::AddressQuotaLimitExceeded));
    assert_eq!(VpcErrorCode::ALL.last(), Some(&VpcErrorCode::VpcLimitExceeded));
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[test]
fn category_distribution() {
    let mut counts: BTreeMap<ErrorCategory, usize> = BTreeMap::new();
    for code in VpcErrorCode::ALL {
        *counts.entry(code.category()).or_default() += 1;
    }
    assert_eq!(counts[&ErrorCategory::UnsupportedOperation], 101);
    assert_eq!(counts[&ErrorCategory::InvalidParameterValue], 88);
    assert_eq!(counts[&ErrorCategory::LimitExceeded], 24);
    assert_eq!(counts[&ErrorCategory::InvalidParameter], 8);
    assert_eq!(counts[&ErrorCategory::InternalError], 3);
    assert_eq!(counts[&ErrorCategory::Product], 24);
    assert!(!counts.contains_key(&ErrorCategory::Client));
    assert_eq!(counts.values().sum::<usize>(), VpcErrorCode::COUNT);
}

#[test]
fn by_base_filters_exactly() {
    let codes: Vec<_> = VpcErrorCode::by_base("InvalidVpcId").collect();
    assert_eq!(codes.len(), 2);
    assert!(codes.iter().all(|c| c.as_str().starts_with("InvalidVpcId.")));
    assert_eq!(VpcErrorCode::by_base("InvalidVpc").count(), 0);
}

#[test]
fn by_category_matches_category() {
    for code in VpcErrorCode::by_category(ErrorCategory::ResourceNotFound) {
        assert_eq!(code.base(), "ResourceNotFound");
    }
    assert_eq!(VpcErrorCode::by_category(ErrorCategory::ResourceNotFound).count(), 2);
}

// ---------------------------------------------------------------------------
// Classifying returned errors
// ---------------------------------------------------------------------------

#[test]
fn classify_parsed_response() {
    let body = br#"{"Response":{"Error":{"Code":"InvalidParameterValue.TooLong","Message":"name too long"},"RequestId":"r-7"}}"#;
    let err = parse_error_response(body).unwrap_err();
    let code = VpcErrorCode::of(&err).expect("known code");
    assert_eq!(code, VpcErrorCode::InvalidParameterValueTooLong);
    assert!(code.matches(&err));
    assert!(!VpcErrorCode::InvalidParameterValue.matches(&err));
}

#[test]
fn unknown_server_code_is_not_classified() {
    let err = SdkError::new("InvalidParameterValue.SomethingNew", "new").with_request_id("r");
    assert!(VpcErrorCode::of(&err).is_none());
    assert_eq!(err.category(), ErrorCategory::InvalidParameterValue);
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn serializes_as_wire_string() {
    let json = serde_json::to_string(&VpcErrorCode::InvalidVpcIdMalformed).unwrap();
    assert_eq!(json, r#""InvalidVpcId.Malformed""#);
    let back: VpcErrorCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, VpcErrorCode::InvalidVpcIdMalformed);
}

#[test]
fn deserializing_unknown_code_fails() {
    let res: Result<VpcErrorCode, _> = serde_json::from_str(r#""Bogus.Code""#);
    let msg = res.unwrap_err().to_string();
    assert!(msg.contains("unknown VPC error code: Bogus.Code"));
}
