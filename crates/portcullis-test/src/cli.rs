//! CLI regression tests for the `portcullis` binary.
//!
//! Invokes the binary as a subprocess, so flag renames, exit-code changes,
//! and output-format drift show up here even when the Rust API is intact.
//!
//! Run with: `cargo test -p portcullis-test`
//! Requires the `portcullis` binary to be built first
//! (`cargo build -p portcullis`).

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns an assert_cmd Command wrapping the `portcullis` binary.
fn portcullis() -> Command {
    // cargo_bin is deprecated for custom build-dir setups; fine for standard workspace use.
    #[allow(deprecated)]
    Command::cargo_bin("portcullis")
        .expect("portcullis binary not found; run `cargo build -p portcullis` first")
}

/// Absolute path to the shared test fixtures directory.
fn fixtures() -> PathBuf {
    // CARGO_MANIFEST_DIR = .../crates/portcullis-test
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates/")
        .parent()
        .expect("workspace root")
        .join("tests/fixtures")
}

// ---------------------------------------------------------------------------
// portcullis validate
// ---------------------------------------------------------------------------

#[test]
fn validate_valid_item_exits_zero() {
    portcullis()
        .args(["validate", "--doc"])
        .arg(fixtures().join("minimal.yaml"))
        .assert()
        .success()
        .stdout(contains("ok"));
}

#[test]
fn validate_paths_document_exits_zero() {
    portcullis()
        .args(["validate", "--doc"])
        .arg(fixtures().join("paths-doc.yaml"))
        .assert()
        .success();
}

#[test]
fn validate_missing_responses_reports_e20000() {
    portcullis()
        .args(["validate", "--doc"])
        .arg(fixtures().join("missing-responses.yaml"))
        .assert()
        .failure()
        .code(1)
        .stdout(contains("E20000"));
}

#[test]
fn validate_parse_error_exits_one() {
    portcullis()
        .args(["validate", "--doc"])
        .arg(fixtures().join("parse-error.yaml"))
        .assert()
        .failure()
        .code(1)
        .stdout(contains("parse"));
}

#[test]
fn validate_missing_file_exits_one() {
    portcullis()
        .args(["validate", "--doc", "this-file-does-not-exist.yaml"])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("file not found"));
}

#[test]
fn validate_unprefixed_extension_fails_by_default() {
    portcullis()
        .args(["validate", "--doc"])
        .arg(fixtures().join("unprefixed-extension.yaml"))
        .assert()
        .failure()
        .code(1)
        .stdout(contains("x-"));
}

#[test]
fn validate_unprefixed_extension_flag_relaxes_rule() {
    portcullis()
        .args(["validate", "--allow-unprefixed-extensions", "--doc"])
        .arg(fixtures().join("unprefixed-extension.yaml"))
        .assert()
        .success();
}

#[test]
fn validate_json_format_outputs_results_and_summary() {
    let output = portcullis()
        .args(["validate", "--doc"])
        .arg(fixtures().join("minimal.yaml"))
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let s = String::from_utf8(output).expect("stdout should be valid UTF-8");
    let v: serde_json::Value =
        serde_json::from_str(&s).expect("--format json output should be valid JSON");
    assert!(
        v.get("results").is_some(),
        "JSON output missing 'results' key"
    );
    assert!(
        v.get("summary").is_some(),
        "JSON output missing 'summary' key"
    );
}

#[test]
fn validate_multiple_docs_reports_each_file() {
    portcullis()
        .args(["validate", "--doc"])
        .arg(fixtures().join("minimal.yaml"))
        .arg("--doc")
        .arg(fixtures().join("missing-responses.yaml"))
        .assert()
        .failure()
        .code(1)
        .stdout(contains("minimal.yaml: ok"))
        .stdout(contains("1 invalid"));
}

// ---------------------------------------------------------------------------
// portcullis normalize
// ---------------------------------------------------------------------------

#[test]
fn normalize_emits_decodable_json() {
    let output = portcullis()
        .args(["normalize", "--doc"])
        .arg(fixtures().join("minimal.yaml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let s = String::from_utf8(output).expect("stdout should be valid UTF-8");
    let v: serde_json::Value = serde_json::from_str(&s).expect("normalize should emit JSON");
    assert!(v.get("get").is_some());
    assert_eq!(v.get("x-owner"), Some(&serde_json::json!("pets-team")));
}

#[test]
fn normalize_reference_item_suppresses_other_fields() {
    let output = portcullis()
        .args(["normalize", "--doc"])
        .arg(fixtures().join("ref-item.yaml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let s = String::from_utf8(output).expect("stdout should be valid UTF-8");
    let v: serde_json::Value = serde_json::from_str(&s).expect("normalize should emit JSON");
    assert_eq!(
        v,
        serde_json::json!({ "$ref": "#/components/pathItems/shared" })
    );
}

#[test]
fn normalize_drops_empty_fields() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"summary: \"\"\nget:\n  responses:\n    \"200\":\n      description: ok\n")
        .expect("write fixture");

    let output = portcullis()
        .args(["normalize", "--doc"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let s = String::from_utf8(output).expect("stdout should be valid UTF-8");
    let v: serde_json::Value = serde_json::from_str(&s).expect("normalize should emit JSON");
    assert!(v.get("summary").is_none(), "empty summary should be dropped");
}

#[test]
fn normalize_missing_file_exits_one() {
    portcullis()
        .args(["normalize", "--doc", "this-file-does-not-exist.yaml"])
        .assert()
        .failure()
        .code(1);
}
