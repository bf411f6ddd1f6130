//! # Food Truck CLI Command Groups (`commands`)
//!
//! File: cli/src/commands/mod.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! This module declares the top-level command groups of the Food Truck
//! CLI. Each group lives in its own directory with a `mod.rs` router
//! (clap argument structs and subcommand dispatch) and one file per
//! subcommand or per cohesive piece of logic.
//!
//! - [`check`]: verify the required host tools are installed and working.
//! - [`setup`]: clone and prepare the Food Truck project repositories.
//! - [`api`]: manage the containerized API service lifecycle.
//! - [`completion`]: install and manage carapace-based shell completion.
//!
//! Command handlers own all user-facing output (`println!`); the shared
//! layers underneath only return structured outcomes.
//!

/// Implements `foodtruck api` (service lifecycle management).
pub mod api;
/// Implements `foodtruck check` (host dependency verification).
pub mod check;
/// Implements `foodtruck completion` (shell completion setup).
pub mod completion;
/// Implements `foodtruck setup` (project repository bootstrap).
pub mod setup;
