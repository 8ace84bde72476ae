//! End-to-end CLI tests
//!
//! Runs the compiled binary against local pyproject.toml fixtures; no
//! network access is required.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_pyproject(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pyproject.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn sample_pyproject() -> (TempDir, PathBuf) {
    write_pyproject(
        r#"[build-system]
requires = ["setuptools"]

[project]
name = "demo"
version = "2.1.0"
description = "Demo package"
license = "MIT"
dependencies = ["flask>=1.0", "six"]
"#,
    )
}

#[test]
fn test_no_input_fails() {
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input"));
}

#[test]
fn test_local_dependency_block() {
    let (_dir, path) = sample_pyproject();
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Requires:       python3-flask >= 1.0",
        ))
        .stdout(predicate::str::contains("Requires:       python3-six"))
        .stdout(predicate::str::contains(
            "BuildRequires:  python3-setuptools",
        ));
}

#[test]
fn test_local_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(dir.path().join("absent.toml"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_local_with_pkg_version_conflicts() {
    let (_dir, path) = sample_pyproject();
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path).arg("--pkg-version").arg("1.0");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("conflicting options"));
}

#[test]
fn test_json_and_spec_conflict() {
    let (_dir, path) = sample_pyproject();
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path).arg("--json").arg("--spec");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("conflicting options"));
}

#[test]
fn test_json_output() {
    let (_dir, path) = sample_pyproject();
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    let output = cmd
        .arg("--local")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .clone();

    let declarations: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    let list = declarations.as_array().expect("JSON output is an array");
    assert_eq!(list.len(), 3);
    assert!(list
        .iter()
        .any(|d| d["name"] == "flask" && d["kind"] == "requires"));
    assert!(list
        .iter()
        .any(|d| d["name"] == "setuptools" && d["kind"] == "build_requires"));
}

#[test]
fn test_spec_skeleton_output() {
    let (_dir, path) = sample_pyproject();
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path).arg("--spec");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("%global pypi_name demo"))
        .stdout(predicate::str::contains("Name:           python3-demo"))
        .stdout(predicate::str::contains("Version:        2.1.0"))
        .stdout(predicate::str::contains("License:        MIT"))
        .stdout(predicate::str::contains("%changelog"));
}

#[test]
fn test_no_rich_deps_expands_bounds() {
    let (_dir, path) = write_pyproject(
        r#"[project]
name = "demo"
version = "1.0"
dependencies = ["pkg~=1.4.2"]
"#,
    );
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path).arg("--no-rich-deps");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("python3-pkg >= 1.4.2"))
        .stdout(predicate::str::contains("python3-pkg < 1.5"))
        .stdout(predicate::str::contains(" with ").not());
}

#[test]
fn test_build_deps_emits_build_requires() {
    let (_dir, path) = write_pyproject(
        r#"[project]
name = "demo"
version = "1.0"
dependencies = ["flask>=1.0"]
"#,
    );
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path).arg("--build-deps");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "BuildRequires:  python3-flask >= 1.0",
        ))
        .stdout(predicate::str::contains("Requires:       ").not());
}

#[test]
fn test_blacklisted_distro_forces_legacy() {
    let (_dir, path) = write_pyproject(
        r#"[project]
name = "demo"
version = "1.0"
dependencies = ["pkg>=1.0,<2.0"]
"#,
    );
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path).arg("--distro").arg("epel7");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(" with ").not());
}

#[test]
fn test_skipped_entry_warning_on_stderr() {
    let (_dir, path) = write_pyproject(
        r#"[project]
name = "demo"
version = "1.0"
dependencies = ["flask>=1.0", "=== not parseable ==="]
"#,
    );
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("python3-flask >= 1.0"))
        .stderr(predicate::str::contains("skipped requirement"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let (_dir, path) = write_pyproject(
        r#"[project]
name = "demo"
version = "1.0"
dependencies = ["flask>=1.0", "=== not parseable ==="]
"#,
    );
    let mut cmd = Command::cargo_bin("py2rpm").unwrap();
    cmd.arg("--local").arg(&path).arg("--quiet");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("skipped requirement").not());
}
