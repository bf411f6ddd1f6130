//! # Food Truck CLI Core Infrastructure (`core`)
//!
//! File: cli/src/core/mod.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Core infrastructure shared by the whole application:
//!
//! - [`error`]: the `FoodtruckError` enum for enumerable failure kinds
//!   and the crate-wide `Result` alias.
//! - [`config`]: the optional TOML user configuration with code-level
//!   defaults (repository URLs, target directory, API service settings).
//!

/// Configuration loading, defaults, and validation.
pub mod config;
/// Error types and the crate-wide `Result` alias.
pub mod error;
