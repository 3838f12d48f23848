// SPDX-License-Identifier: MIT OR Apache-2.0
//! Integration tests for the `tcvpc` CLI binary.

use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;

fn tcvpc() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tcvpc").expect("binary `tcvpc` should be built");
    for var in [
        "TCVPC_LANGUAGE",
        "TCVPC_REGION",
        "TCVPC_LOG_LEVEL",
        "TCVPC_DEBUG",
        "TCVPC_BACKUP_ENDPOINT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// ── Help & version ──────────────────────────────────────────────────

#[test]
fn help_flag_prints_usage() {
    tcvpc()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Tencent Cloud VPC error code toolkit"))
        .stdout(contains("lookup"))
        .stdout(contains("parse"));
}

#[test]
fn version_flag_prints_version() {
    tcvpc()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

// ── lookup ──────────────────────────────────────────────────────────

#[test]
fn lookup_known_code_text() {
    tcvpc()
        .args(["lookup", "InvalidVpcId.NotFound"])
        .assert()
        .success()
        .stdout(contains("INVALIDVPCID_NOTFOUND"))
        .stdout(contains("Sub-code:    NotFound"));
}

#[test]
fn lookup_known_code_json() {
    let out = tcvpc()
        .args(["--format", "json", "lookup", "LimitExceeded"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["code"], "LimitExceeded");
    assert_eq!(v["category"], "limit_exceeded");
    assert!(v.get("sub_code").is_none());
}

#[test]
fn lookup_unknown_code_fails() {
    tcvpc()
        .args(["lookup", "InvalidVpcId.Gone"])
        .assert()
        .failure()
        .stderr(contains("unknown VPC error code"));
}

#[test]
fn lookup_is_case_sensitive() {
    tcvpc()
        .args(["lookup", "invalidvpcid.notfound"])
        .assert()
        .failure();
}

#[test]
fn unknown_code_error_is_json_in_json_mode() {
    let out = tcvpc()
        .args(["--format", "json", "lookup", "Nope"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stderr).unwrap();
    assert!(v["error"].as_str().unwrap().contains("Nope"));
}

// ── list / categories ───────────────────────────────────────────────

#[test]
fn list_by_category_compact() {
    let out = tcvpc()
        .args(["--format", "compact", "list", "--category", "internal-error"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.ends_with("[internal_error]")));
}

#[test]
fn list_by_base() {
    tcvpc()
        .args(["--format", "compact", "list", "--base", "InvalidVpcId"])
        .assert()
        .success()
        .stdout(contains("InvalidVpcId.Malformed"))
        .stdout(contains("InvalidVpcId.NotFound"));
}

#[test]
fn list_rejects_unknown_category() {
    tcvpc()
        .args(["list", "--category", "nonsense"])
        .assert()
        .failure();
}

#[test]
fn categories_json_counts() {
    let out = tcvpc()
        .args(["--format", "json", "categories"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["unsupported_operation"], 101);
    assert_eq!(v["limit_exceeded"], 24);
    assert!(v.get("client").is_none());
}

// ── parse ───────────────────────────────────────────────────────────

#[test]
fn parse_error_body_from_stdin() {
    tcvpc()
        .args(["parse"])
        .write_stdin(
            r#"{"Response":{"Error":{"Code":"RequestLimitExceeded","Message":"slow down"},"RequestId":"req-1"}}"#,
        )
        .assert()
        .success()
        .stdout(contains("Code: RequestLimitExceeded"))
        .stdout(contains("RequestId: req-1"))
        .stdout(contains("Rate limited: yes"));
}

#[test]
fn parse_success_body_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{"Response":{{"RequestId":"req-2"}}}}"#).unwrap();
    tcvpc()
        .args(["--format", "compact", "parse", "--file"])
        .arg(f.path())
        .assert()
        .success()
        .stdout(contains("[ok]"));
}

#[test]
fn parse_with_bad_status_reports_client_error() {
    tcvpc()
        .args(["--format", "compact", "parse", "--status", "503"])
        .write_stdin("upstream unavailable")
        .assert()
        .success()
        .stdout(contains("[error] ClientError.HttpStatusCodeError (client)"));
}

#[test]
fn parse_invalid_json_reports_parse_error() {
    let out = tcvpc()
        .args(["--format", "json", "parse"])
        .write_stdin("<html>")
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["ok"], false);
    assert_eq!(v["error"]["code"], "ClientError.ParseJsonError");
}

#[test]
fn parse_missing_file_fails() {
    tcvpc()
        .args(["parse", "--file", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(contains("read response file"));
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn config_check_default_is_ok() {
    tcvpc()
        .args(["config", "check"])
        .assert()
        .success()
        .stdout(contains("ok"));
}

#[test]
fn config_check_reports_invalid_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "language = \"fr-FR\"").unwrap();
    tcvpc()
        .arg("--config")
        .arg(f.path())
        .args(["config", "check"])
        .assert()
        .failure()
        .stdout(contains("error:"));
}

#[test]
fn config_check_reports_missing_file() {
    tcvpc()
        .args(["--config", "/definitely/not/here.toml", "config", "check"])
        .assert()
        .failure()
        .stdout(contains("not found"));
}

#[test]
fn config_show_prints_toml() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "region = \"ap-shanghai\"").unwrap();
    tcvpc()
        .arg("--config")
        .arg(f.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("region = \"ap-shanghai\""));
}

#[test]
fn config_schema_is_json() {
    let out = tcvpc().args(["config", "schema"]).output().unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(v["properties"]["language"].is_object());
}
