//! # Food Truck CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each
//! other `.rs` file in this directory is compiled as a separate test
//! crate running the real `foodtruck` binary.
//!

// Different test files use different helpers from this module.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// An `assert_cmd::Command` pointing at the compiled `foodtruck` binary.
pub fn foodtruck_cmd() -> Command {
    Command::cargo_bin("foodtruck").expect("Failed to find foodtruck binary for testing")
}
