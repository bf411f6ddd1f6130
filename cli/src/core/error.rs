//! # Food Truck CLI Error Types
//!
//! File: cli/src/core/error.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Food Truck CLI.
//! The split follows the error taxonomy of the tool:
//!
//! - *Invocation errors* (missing executable, timeout, non-zero exit) are
//!   **not** errors at this level at all — they are normalized into
//!   `CommandResult`/outcome values by `common::process` and never raised.
//! - *Precondition errors* (non-empty target directory, missing API
//!   project, carapace not installed) are enumerable and get a dedicated
//!   [`FoodtruckError`] variant with a descriptive message.
//! - Everything else propagates as `anyhow::Error` with context added at
//!   each layer; only `main` turns a failing `Result` into exit code 1.
//!
use thiserror::Error;

/// Custom error type for the Food Truck CLI's enumerable failure kinds.
#[derive(Error, Debug)]
pub enum FoodtruckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Target directory {path} already contains unrelated entries: {entries}")]
    TargetDirNotEmpty { path: String, entries: String },

    #[error("Missing or broken dependencies: {missing}. Please install them before using the Food Truck CLI.")]
    DependencyCheck { missing: String },

    #[error("API project not found. Run this command from the API project directory or a parent directory (expected ./foodtruck-api, ./foodtruck/foodtruck-api, or the same under the parent directory).")]
    ApiProjectNotFound,

    #[error("carapace-bin not found in PATH. Install it from https://carapace-sh.github.io/carapace-bin/ first.")]
    CarapaceNotFound,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = FoodtruckError::Config("missing setting 'projects'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: missing setting 'projects'"
        );

        let not_empty = FoodtruckError::TargetDirNotEmpty {
            path: "/tmp/projects".into(),
            entries: "stray.txt".into(),
        };
        assert!(not_empty.to_string().contains("/tmp/projects"));
        assert!(not_empty.to_string().contains("stray.txt"));

        let deps = FoodtruckError::DependencyCheck {
            missing: "Docker, Docker Daemon".into(),
        };
        assert!(deps.to_string().contains("Docker, Docker Daemon"));
    }
}
