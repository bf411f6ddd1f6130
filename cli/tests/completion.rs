//! # Food Truck CLI Completion Integration Tests
//!
//! File: cli/tests/completion.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Integration tests for `foodtruck completion`. The install and
//! refresh paths write to the user's real shell startup files, so they
//! are not exercised here; `manual` is, with a fake carapace binary on
//! a controlled `PATH`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

/// The completion help lists the three subcommands.
#[test]
fn test_completion_help() {
    foodtruck_cmd()
        .args(["completion", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("refresh"))
        .stdout(predicate::str::contains("manual"));
}

/// A shell outside the supported set is rejected at parse time.
#[test]
fn test_completion_rejects_unknown_shell() {
    foodtruck_cmd()
        .args(["completion", "manual", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

/// Without carapace on PATH, the subcommands fail with an install hint.
#[test]
fn test_completion_manual_without_carapace() {
    let empty = tempdir().unwrap();
    foodtruck_cmd()
        .env("PATH", empty.path())
        .args(["completion", "manual", "--shell", "bash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("carapace"));
}

/// With carapace present, manual prints the setup commands and can
/// write them to a file.
#[test]
#[cfg(unix)]
fn test_completion_manual_with_fake_carapace() {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = tempdir().unwrap();
    let carapace = bin_dir.path().join("carapace");
    std::fs::write(&carapace, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&carapace, std::fs::Permissions::from_mode(0o755)).unwrap();

    let out_dir = tempdir().unwrap();
    let out_file = out_dir.path().join("setup.sh");

    foodtruck_cmd()
        .env("PATH", bin_dir.path())
        .args(["completion", "manual", "--shell", "bash"])
        .args(["--output", out_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("_carapace"));

    let written = std::fs::read_to_string(&out_file).unwrap();
    assert!(written.contains("_carapace"));
    assert!(written.contains("bash"));
}
