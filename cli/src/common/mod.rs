//! # Food Truck CLI Shared Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Shared building blocks used by every command group. The modules here
//! contain no command-specific policy and never print user-facing
//! reports; they return structured values the command handlers render.
//!
//! - [`process`]: external command execution with timeout and failure
//!   normalization (the one invocation primitive of the whole CLI).
//! - [`outcome`]: aggregation of named, typed outcomes into ordered
//!   reports with a derived overall success flag.
//! - [`fs`]: small filesystem wrappers with contextual errors.
//! - [`shell`]: supported-shell enumeration, detection, and rc-file
//!   resolution for the completion commands.
//!

/// Filesystem helpers (ensure dirs, read/write files, list entries).
pub mod fs;
/// Typed outcome aggregation into ordered reports.
pub mod outcome;
/// External process execution with normalized results.
pub mod process;
/// Shell detection and startup-file resolution.
pub mod shell;
