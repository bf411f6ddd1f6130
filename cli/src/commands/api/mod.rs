//! # Food Truck CLI API Command Group (`commands::api`)
//!
//! File: cli/src/commands/api/mod.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Implements the `foodtruck api` command group, which manages the
//! containerized API service of the Food Truck project:
//!
//! - `api setup` / `api install` — prepare the Python environment;
//! - `api start` / `api stop` / `api restart` — compose lifecycle;
//! - `api status` — derived service state (running, PID, port);
//! - `api logs` — tail or follow the service logs;
//! - `api exec` — run an arbitrary command inside the container;
//! - `api migrate` — run the database schema migrations.
//!
//! ## Architecture
//!
//! 1. Parse the subcommand, load the configuration.
//! 2. Locate the API project checkout ([`lifecycle::find_api_project`]);
//!    a missing project is the only hard error here.
//! 3. Build a [`lifecycle::ApiService`] over the system runner and
//!    dispatch. Every operation returns a
//!    [`lifecycle::ServiceOperationResult`]; failures are rendered and
//!    turned into a non-zero exit, never a panic.
//!
//! ## Usage
//!
//! ```bash
//! foodtruck api start --build
//! foodtruck api logs --lines 100 --follow
//! foodtruck api exec pytest -q
//! ```
//!
use crate::common::process::SystemRunner;
use crate::core::config;
use crate::core::error::{FoodtruckError, Result};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

/// Service lifecycle core: status derivation, idempotent start/stop,
/// logs, exec, migrations, and environment preparation.
mod lifecycle;

pub use lifecycle::{ApiService, ServiceOperationResult, ServiceStatus};

/// # API Command Group Arguments (`ApiArgs`)
#[derive(Parser, Debug)]
pub struct ApiArgs {
    #[command(subcommand)]
    command: ApiCommand,
}

/// The api subcommands.
#[derive(Subcommand, Debug)]
enum ApiCommand {
    /// Set up the API project environment (venv + dependencies).
    Setup,
    /// Install or refresh the API dependencies.
    Install,
    /// Start the API services with Docker Compose.
    Start(StartArgs),
    /// Stop the API services.
    Stop,
    /// Restart the API services.
    Restart,
    /// Show the API service status.
    Status,
    /// Show the API service logs.
    Logs(LogsArgs),
    /// Run a command inside the API container.
    Exec(ExecArgs),
    /// Run the database migrations inside the API container.
    Migrate,
}

#[derive(Parser, Debug, Default)]
struct StartArgs {
    /// Rebuild the images before starting.
    #[arg(long)]
    build: bool,
}

#[derive(Parser, Debug)]
struct LogsArgs {
    /// Number of log lines to show.
    #[arg(long, default_value_t = 50)]
    lines: u32,
    /// Keep streaming new log lines.
    #[arg(short, long)]
    follow: bool,
}

#[derive(Parser, Debug)]
struct ExecArgs {
    /// The command to run inside the container.
    #[arg(trailing_var_arg = true, required = true)]
    command: Vec<String>,
}

/// # Handle API Command (`handle_api`)
/// Locates the API project, builds the service handle, and dispatches
/// the requested lifecycle operation.
pub async fn handle_api(args: ApiArgs) -> Result<()> {
    info!("Handling api command...");
    let cfg = config::load_config().context("Failed to load Food Truck configuration")?;

    let cwd = std::env::current_dir().context("Failed to resolve the current directory")?;
    let Some(project_path) = lifecycle::find_api_project(&cwd) else {
        eprintln!("API project not found.");
        eprintln!("Run this command from the API project or a directory containing it.");
        eprintln!("Expected locations:");
        eprintln!("  - ./foodtruck-api/");
        eprintln!("  - ./foodtruck/foodtruck-api/");
        eprintln!("  - ../foodtruck-api/");
        anyhow::bail!(FoodtruckError::ApiProjectNotFound);
    };
    info!("Found API project at {:?}", project_path);

    let service = ApiService::new(&SystemRunner, project_path, &cfg.api);

    match args.command {
        ApiCommand::Setup => {
            let result = service.install().await;
            if result.success {
                render(&result);
                println!("Next steps:");
                println!("  foodtruck api start --build  # Start with Docker Compose");
                println!("  foodtruck api status         # Check service status");
                Ok(())
            } else {
                finish(result)
            }
        }
        ApiCommand::Install => finish(service.install().await),
        ApiCommand::Start(start) => {
            let result = service.start(start.build).await;
            if result.success {
                render(&result);
                println!();
                println!("Service URLs:");
                println!("  - API docs:  http://localhost:{}/docs", cfg.api.port);
                println!("  - API ReDoc: http://localhost:{}/redoc", cfg.api.port);
                println!();
                println!("Services may take a moment to fully start up.");
                println!("Check with: foodtruck api status");
                Ok(())
            } else {
                finish(result)
            }
        }
        ApiCommand::Stop => finish(service.stop().await),
        ApiCommand::Restart => finish(service.restart().await),
        ApiCommand::Status => {
            let status = service.status().await;
            if status.is_running {
                println!("✅ API service is running");
                if let Some(pid) = status.pid {
                    println!("   PID:  {pid}");
                }
                if let Some(port) = status.port {
                    println!("   Port: {port}");
                    println!("   Docs: http://localhost:{port}/docs");
                }
            } else {
                println!("❌ API service is not running");
                println!("   Start it with: foodtruck api start");
            }
            Ok(())
        }
        ApiCommand::Logs(logs) => finish(service.logs(logs.lines, logs.follow).await),
        ApiCommand::Exec(exec) => finish(service.exec(&exec.command).await),
        ApiCommand::Migrate => finish(service.migrate().await),
    }
}

/// Renders a single operation result to the terminal.
fn render(result: &ServiceOperationResult) {
    let marker = if result.success { "✅" } else { "❌" };
    println!("{} {}", marker, result.message);
    if !result.details.is_empty() {
        println!("{}", result.details);
    }
}

/// Renders the result and converts failures into a non-zero exit.
fn finish(result: ServiceOperationResult) -> Result<()> {
    render(&result);
    if result.success {
        Ok(())
    } else {
        anyhow::bail!("{}", result.message);
    }
}
