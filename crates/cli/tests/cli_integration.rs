// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn armval() -> Command {
    Command::cargo_bin("armval").unwrap()
}

fn raw_image(words: &[u32]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for w in words {
        file.write_all(&w.to_le_bytes()).unwrap();
    }
    file
}

fn policy_file(yaml: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_decode_safe_word() {
    armval()
        .args(["decode", "e1a00001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MOV_register"))
        .stdout(predicate::str::contains("MAY_BE_SAFE"));
}

#[test]
fn test_decode_forbidden_word() {
    armval()
        .args(["decode", "0xEF000000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("SVC"))
        .stdout(predicate::str::contains("FORBIDDEN"));
}

#[test]
fn test_decode_decoder_error() {
    // ADDS pc, r0, #1
    armval().args(["decode", "e290f001"]).assert().code(3);
}

#[test]
fn test_decode_json() {
    let output = armval()
        .args(["decode", "--json", "e125be70", "e12fff32"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["rule"], "BKPT");
    assert_eq!(json[0]["literal_pool_head"], true);
    assert_eq!(json[1]["branch_target_register"], "r2");
    assert_eq!(json[1]["defs"], serde_json::json!(["lr", "pc"]));
}

#[test]
fn test_decode_bad_word() {
    armval().args(["decode", "xyz"]).assert().code(2);
}

#[test]
fn test_scan_raw_accepted() {
    // ADD r0, r0, #1; BX lr
    let image = raw_image(&[0xE280_0001, 0xE12F_FF1E]);
    armval()
        .arg("scan")
        .arg(image.path())
        .args(["--raw", "--base", "0x10000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACCEPTED"));
}

#[test]
fn test_scan_raw_json_lists_violations() {
    let image = raw_image(&[0xE280_0001, 0xEF00_0000]);
    let output = armval()
        .arg("scan")
        .arg(image.path())
        .args(["--raw", "--base", "0x10000", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["segment"], "raw");
    assert_eq!(json[0]["violations"][0]["address"], 0x10004);
    assert_eq!(json[0]["violations"][0]["safety"], "FORBIDDEN");
}

#[test]
fn test_scan_policy_relaxes_unpredictable() {
    // LDREXD r1, [r0]
    let image = raw_image(&[0xE1B0_1F9F]);
    armval()
        .arg("scan")
        .arg(image.path())
        .arg("--raw")
        .assert()
        .code(1);

    let policy = policy_file("reject_unpredictable: false\n");
    armval()
        .arg("scan")
        .arg(image.path())
        .arg("--raw")
        .arg("--policy")
        .arg(policy.path())
        .assert()
        .success();
}

#[test]
fn test_scan_respects_image_size_limit() {
    let image = raw_image(&[0xE280_0001, 0xE280_0001]);
    let policy = policy_file("max_image_size: \"4B\"\n");
    armval()
        .arg("scan")
        .arg(image.path())
        .arg("--raw")
        .arg("--policy")
        .arg(policy.path())
        .assert()
        .code(2);
}

#[test]
fn test_scan_rejects_empty_image() {
    let image = raw_image(&[]);
    armval()
        .arg("scan")
        .arg(image.path())
        .arg("--raw")
        .assert()
        .code(2);
}

#[test]
fn test_scan_missing_file() {
    armval()
        .args(["scan", "/nonexistent/image.elf"])
        .assert()
        .code(2);
}

#[test]
fn test_scan_rejects_non_elf() {
    let image = raw_image(&[0xE280_0001]);
    armval().arg("scan").arg(image.path()).assert().code(2);
}

#[test]
fn test_rules_lists_table() {
    armval()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADC_immediate"))
        .stdout(predicate::str::contains("cccc0010101snnnnddddiiiiiiiiiiii"));
}

#[test]
fn test_rules_json_carries_capabilities() {
    let output = armval().args(["rules", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows[0]["rule"], "Unnamed");
    let bkpt = rows.iter().find(|r| r["rule"] == "BKPT").unwrap();
    assert_eq!(bkpt["kind"], "Bkpt");
    assert_eq!(bkpt["group"], "branch");
    assert_eq!(bkpt["capabilities"], "LITERAL_POOL_HEAD");
}
