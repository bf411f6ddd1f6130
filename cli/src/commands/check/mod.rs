//! # Food Truck CLI Check Command (`commands::check`)
//!
//! File: cli/src/commands/check/mod.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Implements `foodtruck check`: verifies that every host tool the Food
//! Truck project depends on (Python 3.13, uv, git, docker, a running
//! docker daemon) is installed and working, and prints a complete status
//! table.
//!
//! ## Architecture
//!
//! 1. Run the fixed probe set via [`probes::perform_dependency_checks`]
//!    (every probe runs; no short-circuiting).
//! 2. Print one status line per dependency, in declaration order.
//! 3. On full success, report readiness and return `Ok(())`.
//! 4. Otherwise print installation guides and return a
//!    `FoodtruckError::DependencyCheck` naming the failing dependencies —
//!    `main` turns that into exit code 1, which downstream automation
//!    relies on.
//!
//! ## Usage
//!
//! ```bash
//! foodtruck check
//! ```
//!
use crate::common::process::SystemRunner;
use crate::core::error::{FoodtruckError, Result};
use clap::Parser;
use tracing::info;

/// Probe implementations and acceptance rules.
mod probes;

pub use probes::{CheckReport, DependencyStatus};

/// # Check Command Arguments (`CheckArgs`)
/// `foodtruck check` takes no options; the probe set is fixed.
#[derive(Parser, Debug, Default)]
#[command(about = "Check that all required host tools are installed and working")]
pub struct CheckArgs {}

/// # Handle Check Command (`handle_check`)
/// Runs all dependency probes and renders the aggregate report.
///
/// ## Returns
/// * `Ok(())` when every dependency is present and working.
/// * `Err(FoodtruckError::DependencyCheck)` naming the failing entries
///   otherwise (exit code 1 at the process level).
pub async fn handle_check(_args: CheckArgs) -> Result<()> {
    info!("Handling check command...");

    println!("🔍 Checking Dependencies");
    println!("Verifying all required tools are installed and working...");
    println!();

    let report = probes::perform_dependency_checks(&SystemRunner).await;

    // One line per dependency, declaration order.
    for (name, status) in report.entries() {
        if status.ok {
            println!("✅ {}: {}", name, status.message);
        } else {
            println!("❌ {}: {}", name, status.message);
        }
    }

    println!();
    println!("----------------------------------------");

    if report.all_ok() {
        println!("✅ All dependencies are properly installed and working!");
        println!("You're ready to use the Food Truck CLI!");
        Ok(())
    } else {
        println!("⚠️  Some dependencies are missing or not working properly.");
        println!();
        print_installation_guides();
        anyhow::bail!(FoodtruckError::DependencyCheck {
            missing: report.failure_names(),
        });
    }
}

/// Prints installation pointers for every checked dependency.
fn print_installation_guides() {
    println!("Installation guides:");
    println!("  • Python 3.13: https://www.python.org/downloads/");
    println!("  • UV: https://docs.astral.sh/uv/getting-started/installation/");
    println!("  • Git: https://git-scm.com/downloads");
    println!("  • Docker: https://docs.docker.com/get-docker/");
}
