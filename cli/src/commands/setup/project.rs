//! # Food Truck CLI Project Setup Orchestration (`commands::setup::project`)
//!
//! File: cli/src/commands/setup/project.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! The per-project setup pipeline behind `foodtruck setup`: for each
//! declared project (name, repository URL, skip flag) decide between
//! skip / already-present / clone, and run the post-clone dependency
//! install for projects that need one. Projects are independent — a
//! failure in one never prevents the others from being attempted — but
//! the steps *within* a project are causally dependent and short-circuit
//! at the first failure.
//!
//! ## Architecture
//!
//! 1. [`setup_projects`] prepares the target directory (created when
//!    missing; refused when it holds entries unrelated to the declared
//!    projects — a configuration error distinct from any per-project
//!    failure) and then runs [`setup_project`] for each entry.
//! 2. [`setup_project`] applies the per-project policy:
//!    - skip flag set → success immediately, nothing is invoked;
//!    - project directory already on disk → success, treated as already
//!      set up (no re-clone, no re-install, no staleness detection);
//!    - otherwise `git clone`; a clone failure aborts this project;
//!    - projects recognized as needing a dependency install (name
//!      contains "api") then run `uv sync`; an install failure aborts
//!      too, leaving the fresh clone in place (no rollback).
//!
//! All external commands go through the injected [`CommandRunner`], so
//! the whole policy is unit tested without network or git.
//!
use crate::common::fs;
use crate::common::outcome::Outcome;
use crate::common::process::{cmd, CommandRunner, DEFAULT_TIMEOUT, PROBE_TIMEOUT};
use crate::core::error::{FoodtruckError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A single project declaration consumed by the setup pipeline.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Directory name under the target directory (e.g. "foodtruck-api").
    pub name: String,
    /// Repository URL passed to `git clone`.
    pub repo_url: String,
    /// When set, the project is reported as skipped without touching
    /// the filesystem or invoking any command.
    pub skip: bool,
}

/// Result of setting up one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSetupResult {
    pub success: bool,
    pub message: String,
    /// Set only when the project directory exists after this operation
    /// (successful clone, or skip-clone because it was already there).
    pub project_path: Option<PathBuf>,
}

impl ProjectSetupResult {
    fn ok(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self {
            success: true,
            message: message.into(),
            project_path: path,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            project_path: None,
        }
    }
}

impl Outcome for ProjectSetupResult {
    fn ok(&self) -> bool {
        self.success
    }
    fn summary(&self) -> &str {
        &self.message
    }
}

/// Sets up every declared project under `target_dir`.
///
/// Returns one result per project, in declaration order; the partial
/// results list is always complete even when projects fail. The only
/// `Err` this function produces is the target-directory precondition
/// violation, which is a configuration error rather than a setup result.
pub async fn setup_projects<R: CommandRunner>(
    runner: &R,
    projects: &[ProjectSpec],
    target_dir: &Path,
) -> Result<Vec<ProjectSetupResult>> {
    prepare_target_dir(projects, target_dir)?;

    let mut results = Vec::with_capacity(projects.len());
    for project in projects {
        results.push(setup_project(runner, project, target_dir).await);
    }
    Ok(results)
}

/// Precondition check on the clone target.
///
/// The directory is created when missing. Entries belonging to declared
/// projects are fine (the per-project policy treats them as already set
/// up), but anything else means the user pointed setup at a directory
/// that is already in use, which is refused outright.
fn prepare_target_dir(projects: &[ProjectSpec], target_dir: &Path) -> Result<()> {
    fs::ensure_dir_exists(target_dir)?;

    let foreign: Vec<String> = fs::dir_entry_names(target_dir)?
        .into_iter()
        .filter(|entry| !projects.iter().any(|p| p.name == *entry))
        .collect();

    if !foreign.is_empty() {
        anyhow::bail!(FoodtruckError::TargetDirNotEmpty {
            path: target_dir.display().to_string(),
            entries: foreign.join(", "),
        });
    }
    Ok(())
}

/// Applies the per-project setup policy (see module docs).
pub async fn setup_project<R: CommandRunner>(
    runner: &R,
    spec: &ProjectSpec,
    target_dir: &Path,
) -> ProjectSetupResult {
    if spec.skip {
        info!("Skipping {} setup", spec.name);
        return ProjectSetupResult::ok(format!("Skipping {} setup", spec.name), None);
    }

    let project_path = target_dir.join(&spec.name);

    // An existing directory counts as already set up. Detecting a stale
    // or partial clone is out of scope.
    if project_path.exists() {
        info!("{} already present at {:?}", spec.name, project_path);
        return ProjectSetupResult::ok(
            format!("{} directory already exists, skipping clone", spec.name),
            Some(project_path),
        );
    }

    debug!("Cloning {} from {}", spec.name, spec.repo_url);
    let dest = project_path.display().to_string();
    let clone = runner
        .run(
            &cmd(["git", "clone", spec.repo_url.as_str(), dest.as_str()]),
            None,
            DEFAULT_TIMEOUT,
        )
        .await;

    if !clone.success {
        // Clone failure aborts this project; the install step is never
        // attempted.
        return ProjectSetupResult::failed(format!(
            "Failed to clone {}: {}",
            spec.name, clone.stderr
        ));
    }

    if requires_dependency_install(&spec.name) {
        if let Err(message) = install_dependencies(runner, &project_path, &spec.name).await {
            // The clone stays on disk; only the result reports failure.
            return ProjectSetupResult {
                success: false,
                message,
                project_path: Some(project_path),
            };
        }
    }

    ProjectSetupResult::ok(format!("{} setup completed", spec.name), Some(project_path))
}

/// Projects whose dependencies must be synced after cloning.
fn requires_dependency_install(name: &str) -> bool {
    name.to_lowercase().contains("api")
}

/// Post-clone install step: verify uv is available, then sync the
/// project's dependencies inside the fresh clone.
async fn install_dependencies<R: CommandRunner>(
    runner: &R,
    project_path: &Path,
    name: &str,
) -> std::result::Result<(), String> {
    let uv_probe = runner
        .run(&cmd(["uv", "--version"]), Some(project_path), PROBE_TIMEOUT)
        .await;
    if !uv_probe.success {
        return Err("UV is not available. Please install UV first.".to_string());
    }

    let sync = runner
        .run(&cmd(["uv", "sync"]), Some(project_path), DEFAULT_TIMEOUT)
        .await;
    if !sync.success {
        return Err(format!(
            "Failed to install {} dependencies: {}",
            name, sync.stderr
        ));
    }

    info!("{} dependencies installed", name);
    Ok(())
}
