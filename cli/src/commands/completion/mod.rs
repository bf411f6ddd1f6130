//! # Food Truck CLI Completion Command Group (`commands::completion`)
//!
//! File: cli/src/commands/completion/mod.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Implements the `foodtruck completion` command group, which wires the
//! CLI into carapace-bin shell completion:
//!
//! - `completion install` — copy the command spec into carapace's specs
//!   directory and append the setup block to the shell startup file;
//! - `completion refresh` — remove both and install from scratch;
//! - `completion manual` — print the setup commands for users who keep
//!   their startup files by hand (optionally written to a file).
//!
//! ## Architecture
//!
//! The handlers here own all I/O: shell detection, locating the
//! carapace executable on `PATH` (its absence is a hard precondition
//! failure), and reading/writing the startup file. The string-level
//! block editing lives in [`carapace`] as pure functions.
//!
//! ## Usage
//!
//! ```bash
//! foodtruck completion install
//! foodtruck completion refresh --shell zsh
//! foodtruck completion manual --shell fish --output setup.fish
//! ```
//!
use crate::common::fs;
use crate::common::shell::{self, Shell};
use crate::core::error::{FoodtruckError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

/// Embedded spec, marker-block editing, and carapace paths.
mod carapace;

/// # Completion Command Group Arguments (`CompletionArgs`)
#[derive(Parser, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    command: CompletionCommand,
}

/// The completion subcommands.
#[derive(Subcommand, Debug)]
enum CompletionCommand {
    /// Install shell completion.
    Install(ShellArg),
    /// Reinstall shell completion from scratch.
    Refresh(ShellArg),
    /// Print the manual setup commands.
    Manual(ManualArgs),
}

/// Shell selection shared by every subcommand.
#[derive(Parser, Debug, Default)]
struct ShellArg {
    /// Target shell (detected from the environment when omitted).
    #[arg(long)]
    shell: Option<Shell>,
}

#[derive(Parser, Debug, Default)]
struct ManualArgs {
    #[command(flatten)]
    shell: ShellArg,
    /// Write the setup commands to this file instead of only printing.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// # Handle Completion Command (`handle_completion`)
pub async fn handle_completion(args: CompletionArgs) -> Result<()> {
    info!("Handling completion command...");
    match args.command {
        CompletionCommand::Install(arg) => install(resolve_shell(arg)?),
        CompletionCommand::Refresh(arg) => refresh(resolve_shell(arg)?),
        CompletionCommand::Manual(manual_args) => {
            manual(resolve_shell(manual_args.shell)?, manual_args.output)
        }
    }
}

/// Flag wins over detection.
fn resolve_shell(arg: ShellArg) -> Result<Shell> {
    let shell = match arg.shell {
        Some(shell) => shell,
        None => Shell::detect(),
    };
    debug!("Resolved shell: {}", shell);
    Ok(shell)
}

/// Locates the carapace executable; a missing binary is a hard error
/// for every subcommand.
fn require_carapace() -> Result<PathBuf> {
    match shell::find_in_path("carapace") {
        Some(path) => Ok(path),
        None => {
            eprintln!("carapace-bin not found on PATH.");
            eprintln!("Install it from https://carapace.sh and try again.");
            anyhow::bail!(FoodtruckError::CarapaceNotFound)
        }
    }
}

fn install(shell_kind: Shell) -> Result<()> {
    let carapace_path = require_carapace()?;
    let config_file = shell_kind.config_file()?;

    let existing = if config_file.exists() {
        fs::read_file_to_string(&config_file)?
    } else {
        String::new()
    };
    if carapace::has_block(&existing) {
        println!("Completion already installed for {shell_kind}.");
        println!("Use 'foodtruck completion refresh' to reinstall.");
        return Ok(());
    }

    let spec_path = carapace::install_spec(&carapace::spec_dir()?)?;
    println!("✅ Carapace spec saved to {}", spec_path.display());

    let snippet = carapace::setup_snippet(shell_kind, &carapace_path);
    let updated = carapace::append_block(&existing, &snippet);
    fs::write_string_to_file(&config_file, &updated)?;
    println!("✅ Configured {shell_kind} completion in {}", config_file.display());
    println!();
    println!(
        "Restart your terminal or run 'source {}' to activate.",
        config_file.display()
    );
    Ok(())
}

fn refresh(shell_kind: Shell) -> Result<()> {
    let spec_dir = carapace::spec_dir()?;
    if carapace::remove_spec(&spec_dir)? {
        println!("Removed the existing carapace spec.");
    }

    let config_file = shell_kind.config_file()?;
    if config_file.exists() {
        let existing = fs::read_file_to_string(&config_file)?;
        if carapace::has_block(&existing) {
            fs::write_string_to_file(&config_file, &carapace::remove_block(&existing))?;
            println!("Removed the previous completion block from {}", config_file.display());
        }
    }

    install(shell_kind)
}

fn manual(shell_kind: Shell, output: Option<PathBuf>) -> Result<()> {
    let carapace_path = require_carapace()?;
    let snippet = carapace::setup_snippet(shell_kind, &carapace_path);

    println!("To enable completion for {shell_kind}, add this to your shell configuration:");
    println!();
    println!("{snippet}");

    if let Some(path) = output {
        let content = format!("# Food Truck CLI completion for {shell_kind}\n{snippet}\n");
        fs::write_string_to_file(&path, &content)?;
        println!();
        println!("✅ Setup commands saved to {}", path.display());
    }
    Ok(())
}
