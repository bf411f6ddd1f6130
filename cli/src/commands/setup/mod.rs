//! # Food Truck CLI Setup Command Group (`commands::setup`)
//!
//! File: cli/src/commands/setup/mod.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Implements the `foodtruck setup` command group, which clones and
//! prepares the Food Truck project repositories:
//!
//! - `setup api` — only the API project (website skipped);
//! - `setup website` — only the website project (API skipped);
//! - `setup all` — both, with individual `--skip-*` flags.
//!
//! Repository URLs and the target directory come from flags when given,
//! falling back to the user configuration and its defaults.
//!
//! ## Architecture
//!
//! 1. Parse the subcommand and flags, load the configuration.
//! 2. Build the ordered [`project::ProjectSpec`] list (API first, then
//!    website — declaration order is what the report shows).
//! 3. Run [`project::setup_projects`], which enforces the
//!    target-directory precondition and returns one result per project.
//! 4. Render every result; any per-project failure makes the command
//!    exit non-zero (after the full list is shown).
//!
//! ## Usage
//!
//! ```bash
//! foodtruck setup all
//! foodtruck setup api --target-dir ~/code
//! foodtruck setup all --skip-website
//! ```
//!
use crate::common::process::SystemRunner;
use crate::core::{config, error::Result};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

/// Per-project setup policy and orchestration.
mod project;

pub use project::{ProjectSetupResult, ProjectSpec};

/// # Setup Command Group Arguments (`SetupArgs`)
#[derive(Parser, Debug)]
pub struct SetupArgs {
    #[command(subcommand)]
    command: SetupCommand,
}

/// The setup subcommands.
#[derive(Subcommand, Debug)]
enum SetupCommand {
    /// Set up only the API project.
    Api(ScopedArgs),
    /// Set up only the website project.
    Website(ScopedArgs),
    /// Set up both projects.
    All(AllArgs),
}

/// Flags shared by the single-project subcommands.
#[derive(Parser, Debug, Default)]
struct ScopedArgs {
    /// Repository URL override for the selected project.
    #[arg(long)]
    repo: Option<String>,
    /// Directory to clone into (defaults to the configured target dir).
    #[arg(long)]
    target_dir: Option<String>,
}

/// Flags for `setup all`.
#[derive(Parser, Debug, Default)]
struct AllArgs {
    /// API repository URL override.
    #[arg(long)]
    api_repo: Option<String>,
    /// Website repository URL override.
    #[arg(long)]
    website_repo: Option<String>,
    /// Directory to clone into (defaults to the configured target dir).
    #[arg(long)]
    target_dir: Option<String>,
    /// Skip the API project.
    #[arg(long)]
    skip_api: bool,
    /// Skip the website project.
    #[arg(long)]
    skip_website: bool,
}

/// # Handle Setup Command (`handle_setup`)
/// Builds the project list for the chosen subcommand and runs the
/// orchestrator, rendering one line per project afterwards.
pub async fn handle_setup(args: SetupArgs) -> Result<()> {
    info!("Handling setup command...");
    let cfg = config::load_config().context("Failed to load Food Truck configuration")?;

    // Translate the subcommand into (api spec, website spec, target dir).
    let (api_repo, website_repo, target_dir, skip_api, skip_website) = match args.command {
        SetupCommand::Api(scoped) => (
            scoped.repo.unwrap_or_else(|| cfg.projects.api_repo.clone()),
            cfg.projects.website_repo.clone(),
            scoped.target_dir,
            false,
            true,
        ),
        SetupCommand::Website(scoped) => (
            cfg.projects.api_repo.clone(),
            scoped.repo.unwrap_or_else(|| cfg.projects.website_repo.clone()),
            scoped.target_dir,
            true,
            false,
        ),
        SetupCommand::All(all) => (
            all.api_repo.unwrap_or_else(|| cfg.projects.api_repo.clone()),
            all.website_repo
                .unwrap_or_else(|| cfg.projects.website_repo.clone()),
            all.target_dir,
            all.skip_api,
            all.skip_website,
        ),
    };

    let target_dir = resolve_target_dir(target_dir, &cfg);
    debug!("Setup target directory: {:?}", target_dir);

    let projects = vec![
        ProjectSpec {
            name: "foodtruck-api".to_string(),
            repo_url: api_repo,
            skip: skip_api,
        },
        ProjectSpec {
            name: "foodtruck-website".to_string(),
            repo_url: website_repo,
            skip: skip_website,
        },
    ];

    println!("Food Truck Development Environment Setup");
    println!("----------------------------------------");
    println!("Target directory: {}", target_dir.display());
    println!();

    let results = project::setup_projects(&SystemRunner, &projects, &target_dir).await?;

    let mut failed = Vec::new();
    for (spec, result) in projects.iter().zip(&results) {
        if result.success {
            println!("✅ {}: {}", spec.name, result.message);
        } else {
            println!("❌ {}: {}", spec.name, result.message);
            failed.push(spec.name.as_str());
        }
    }

    if failed.is_empty() {
        println!();
        println!("🎉 Setup completed! Projects live in {}", target_dir.display());
        println!("Next steps:");
        println!("  foodtruck api start --build  # Start the API with Docker Compose");
        println!("  foodtruck api status         # Check service status");
        Ok(())
    } else {
        anyhow::bail!("Setup failed for: {}", failed.join(", "));
    }
}

/// Target directory resolution: flag wins over config; `~` expands.
fn resolve_target_dir(flag: Option<String>, cfg: &config::Config) -> PathBuf {
    let raw = flag.unwrap_or_else(|| cfg.projects.target_dir.clone());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}
