//! # Food Truck CLI Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the setup, api, and completion
//! commands: ensuring directories exist, reading/writing whole files, and
//! inspecting directory contents. All functions add path context to I/O
//! errors via `anyhow::Context`.
//!
use crate::core::error::{FoodtruckError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory (and any missing parents) when absent. Errors if
/// the path exists but is not a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(FoodtruckError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string, with path context on error.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, creating parent directories as needed.
/// Overwrites the file if it already exists.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Lists the file names of a directory's immediate entries.
///
/// Used by the setup precondition check to detect a non-empty target
/// directory. Entries whose names are not valid UTF-8 are still reported
/// (lossily) so the check cannot be bypassed by odd file names.
pub fn dir_entry_names(path: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in
        fs::read_dir(path).with_context(|| format!("Failed to read directory {:?}", path))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in {:?}", path))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
