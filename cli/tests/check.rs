//! # Food Truck CLI Check Integration Tests
//!
//! File: cli/tests/check.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Integration tests for `foodtruck check`. The command probes the real
//! host, so success depends on what is installed; these tests assert
//! the report shape without assuming a particular machine.
//!

mod common;
use common::*;
use predicates::prelude::*;

/// The report always lists every dependency, installed or not.
#[test]
fn test_check_lists_all_dependencies() {
    foodtruck_cmd()
        .arg("check")
        .assert()
        .stdout(predicate::str::contains("Python 3.13"))
        .stdout(predicate::str::contains("UV"))
        .stdout(predicate::str::contains("Git"))
        .stdout(predicate::str::contains("Docker"))
        .stdout(predicate::str::contains("Docker Daemon"));
}

/// Check takes no further arguments.
#[test]
fn test_check_rejects_arguments() {
    foodtruck_cmd()
        .args(["check", "extra"])
        .assert()
        .failure();
}
