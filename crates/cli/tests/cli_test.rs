//! Process-level tests for the gav-reader binary

use assert_cmd::Command;
use gav_reader_core::{RecordIndex, parse_record, parse_records};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn gav_reader() -> Command {
    let mut cmd = Command::cargo_bin("gav-reader").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_gav(args: &[&str]) -> String {
    let output = gav_reader().arg("gav").args(args).output().unwrap();
    assert!(output.status.success(), "gav-reader failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_root_module_record() {
    gav_reader()
        .args([
            "gav",
            "--gav",
            "com.acme:widget:1.0.0",
            "--pom-path",
            "/repo/widget/pom.xml",
        ])
        .assert()
        .success()
        .stdout(
            "{\"gav\":\"com.acme:widget:1.0.0\",\"parentGav\":\"\",\"pomPath\":\"/repo/widget/pom.xml\"}\n",
        );
}

#[test]
fn test_child_module_record() {
    gav_reader()
        .args([
            "gav",
            "--gav",
            "com.acme:widget-core:1.0.0",
            "--parent-gav",
            "com.acme:widget-parent:1.0.0",
            "--pom-path",
            "/repo/widget/core/pom.xml",
        ])
        .assert()
        .success()
        .stdout(
            "{\"gav\":\"com.acme:widget-core:1.0.0\",\"parentGav\":\"com.acme:widget-parent:1.0.0\",\"pomPath\":\"/repo/widget/core/pom.xml\"}\n",
        );
}

#[test]
fn test_missing_module_coordinate_fails_without_output() {
    gav_reader()
        .args(["gav", "--pom-path", "/repo/widget/pom.xml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Module coordinate is missing"));
}

#[test]
fn test_missing_pom_path_fails_without_output() {
    gav_reader()
        .args(["gav", "--gav", "com.acme:widget:1.0.0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Descriptor path is missing"));
}

#[test]
fn test_malformed_parent_fails_without_output() {
    gav_reader()
        .args([
            "gav",
            "--gav",
            "com.acme:widget:1.0.0",
            "--parent-gav",
            "com.acme:widget-parent",
            "--pom-path",
            "/repo/widget/pom.xml",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid --parent-gav"));
}

#[test]
fn test_empty_parent_argument_matches_absent_parent() {
    let with_empty = run_gav(&[
        "--gav",
        "com.acme:widget:1.0.0",
        "--parent-gav",
        "",
        "--pom-path",
        "/repo/widget/pom.xml",
    ]);
    let without = run_gav(&["--gav", "com.acme:widget:1.0.0", "--pom-path", "/repo/widget/pom.xml"]);

    assert_eq!(with_empty, without);
    assert!(with_empty.contains(r#""parentGav":"""#));
}

#[test]
fn test_all_empty_parent_argument_matches_absent_parent() {
    gav_reader()
        .args([
            "gav",
            "--gav",
            "com.acme:widget:1.0.0",
            "--parent-gav",
            "::",
            "--pom-path",
            "/repo/widget/pom.xml",
        ])
        .assert()
        .success()
        .stdout(
            "{\"gav\":\"com.acme:widget:1.0.0\",\"parentGav\":\"\",\"pomPath\":\"/repo/widget/pom.xml\"}\n",
        );
}

#[test]
fn test_relative_pom_path_resolves_against_cwd() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path().to_str().unwrap();

    let stdout = run_gav(&[
        "--gav",
        "com.acme:widget:1.0.0",
        "--pom-path",
        "core/pom.xml",
        "--cwd",
        cwd,
    ]);

    let record = parse_record(stdout.trim_end()).unwrap();
    assert!(record.descriptor_path().is_absolute());
    assert_eq!(record.descriptor_path(), temp_dir.path().join("core/pom.xml"));
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let output = gav_reader()
        .env("RUST_LOG", "debug")
        .args([
            "gav",
            "--gav",
            "com.acme:widget:1.0.0",
            "--pom-path",
            "/repo/widget/pom.xml",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(parse_record(stdout.trim_end()).is_ok());
}

#[test]
fn test_multi_module_output_builds_index() {
    let mut output = String::new();
    output.push_str(&run_gav(&[
        "--gav",
        "com.acme:widget-parent:1.0.0",
        "--pom-path",
        "/repo/widget/pom.xml",
    ]));
    output.push_str(&run_gav(&[
        "--gav",
        "com.acme:widget-core:1.0.0",
        "--parent-gav",
        "com.acme:widget-parent:1.0.0",
        "--pom-path",
        "/repo/widget/core/pom.xml",
    ]));

    let records = parse_records(&output).unwrap();
    assert_eq!(records.len(), 2);

    let index = RecordIndex::from_records(&records);
    assert_eq!(
        index.parent_of(Path::new("/repo/widget/core/pom.xml")),
        Some(Path::new("/repo/widget/pom.xml"))
    );
}

#[test]
fn test_no_subcommand_prints_usage() {
    gav_reader()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
