//! # Food Truck CLI Shell Utilities (`common::shell`)
//!
//! File: cli/src/common/shell.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Shared shell-related helpers for the completion command group:
//! the closed set of supported shells, detection of the user's shell
//! from the environment, resolution of each shell's startup file, and a
//! PATH lookup for external executables.
//!
//! Supported shells are a closed enumeration validated up front by clap
//! (`ValueEnum`); an unsupported shell name is rejected at argument
//! parsing time rather than surfacing later as a runtime error.
//!
use crate::core::error::Result;
use anyhow::Context;
use clap::ValueEnum;
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// The shells the completion command knows how to configure.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::Powershell => "powershell",
        };
        write!(f, "{name}")
    }
}

impl Shell {
    /// Detects the user's shell from the environment.
    ///
    /// Unix-likes read `$SHELL`; Windows defaults to PowerShell. Anything
    /// unrecognized falls back to bash, mirroring how the setup flows
    /// treat bash as the lowest common denominator.
    pub fn detect() -> Self {
        if cfg!(windows) {
            return Shell::Powershell;
        }
        match env::var("SHELL") {
            Ok(shell_path) if shell_path.ends_with("zsh") => Shell::Zsh,
            Ok(shell_path) if shell_path.ends_with("fish") => Shell::Fish,
            Ok(shell_path) if shell_path.ends_with("bash") => Shell::Bash,
            Ok(shell_path) => {
                warn!("Unrecognized shell '{}', defaulting to bash", shell_path);
                Shell::Bash
            }
            Err(_) => {
                warn!("SHELL not set, defaulting to bash");
                Shell::Bash
            }
        }
    }

    /// Resolves the startup file this shell reads on launch.
    ///
    /// The PowerShell profile honors a `POWERSHELL_PROFILE` override
    /// before falling back to the documented default location.
    pub fn config_file(&self) -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        let path = match self {
            Shell::Bash => home.join(".bashrc"),
            Shell::Zsh => home.join(".zshrc"),
            Shell::Fish => home.join(".config").join("fish").join("config.fish"),
            Shell::Powershell => match env::var("POWERSHELL_PROFILE") {
                Ok(profile) => PathBuf::from(profile),
                Err(_) => home
                    .join("Documents")
                    .join("PowerShell")
                    .join("Microsoft.PowerShell_profile.ps1"),
            },
        };
        debug!("Config file for {}: {:?}", self, path);
        Ok(path)
    }
}

/// Searches the `PATH` environment variable for an executable.
///
/// Returns the first matching file, appending `.exe` on Windows.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let file_name = if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    };
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(&file_name);
        if candidate.is_file() {
            debug!("Found '{}' at {:?}", name, candidate);
            return Some(candidate);
        }
    }
    None
}
