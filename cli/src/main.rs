//! # Food Truck CLI Main Entry Point
//!
//! File: cli/src/main.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! This file is the entry point for the Food Truck CLI, the developer
//! environment bootstrap tool for the Food Truck project. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command group handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each top-level command (`check`, `setup`, `api`, `completion`) is a
//!   variant in the `Commands` enum.
//! - Commands are mapped to handler functions in their respective modules.
//! - All errors are propagated to this level; this is the single place a
//!   failing outcome becomes process exit code 1.
//!
//! ## Examples
//!
//! ```bash
//! # Verify the host has everything the project needs
//! foodtruck check
//!
//! # Clone and prepare both project repositories
//! foodtruck setup all
//!
//! # Start the containerized API with a rebuild
//! foodtruck -v api start --build
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Command group logic (check, setup, api, completion).
mod common; // Shared utilities (process, outcome, fs, shell).
mod core; // Core infrastructure (errors, config).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "foodtruck",
    about = "🚚 Food Truck CLI: developer environment bootstrap",
    long_about = "Bootstrap and manage the Food Truck development environment:\n\
                  verify host dependencies, clone the project repositories,\n\
                  run the containerized API, and set up shell completion.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Check that all required host tools are installed and working.
    Check(commands::check::CheckArgs),
    /// Clone and prepare the Food Truck project repositories.
    Setup(commands::setup::SetupArgs),
    /// Manage the containerized Food Truck API service.
    Api(commands::api::ApiArgs),
    /// Install and manage shell completion (carapace-bin).
    Completion(commands::completion::CompletionArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Check(args) => commands::check::handle_check(args).await,
        Commands::Setup(args) => commands::setup::handle_setup(args).await,
        Commands::Api(args) => commands::api::handle_api(args).await,
        Commands::Completion(args) => commands::completion::handle_completion(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
