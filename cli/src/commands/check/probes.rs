//! # Food Truck CLI Dependency Probes (`commands::check::probes`)
//!
//! File: cli/src/commands/check/probes.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! The fixed set of host dependency probes behind `foodtruck check`:
//! Python 3.13, uv, git, docker, and the docker daemon. Each probe runs a
//! single version/info command through the shared [`CommandRunner`] with
//! the short probe timeout, then applies a probe-specific acceptance rule
//! to the captured output.
//!
//! ## Architecture
//!
//! Every probe is split in two:
//! - an async function that invokes the external command, and
//! - a pure `evaluate_*` function mapping the [`CommandResult`] to a
//!   [`DependencyStatus`].
//!
//! The split keeps the acceptance rules (version substrings, stderr
//! refinements such as "daemon not running" vs "not installed") unit
//! testable without spawning processes.
//!
//! All probes always run, regardless of earlier failures, so the user
//! sees the complete status table ([`perform_dependency_checks`]).
//!
use crate::common::outcome::{Outcome, Report};
use crate::common::process::{cmd, CommandResult, CommandRunner, PROBE_TIMEOUT};
use tracing::info;

/// The interpreter version the API project requires (major.minor).
pub const REQUIRED_PYTHON: &str = "3.13";

/// Status of a single dependency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyStatus {
    pub ok: bool,
    pub message: String,
}

impl DependencyStatus {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn broken(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl Outcome for DependencyStatus {
    fn ok(&self) -> bool {
        self.ok
    }
    fn summary(&self) -> &str {
        &self.message
    }
}

/// Report over the whole fixed probe set.
pub type CheckReport = Report<DependencyStatus>;

/// Checks that a Python interpreter of the required version is available.
pub async fn check_python<R: CommandRunner>(runner: &R) -> DependencyStatus {
    let result = runner
        .run(&cmd(["python3", "--version"]), None, PROBE_TIMEOUT)
        .await;
    evaluate_python(&result)
}

/// Acceptance rule for the interpreter probe: the reported version must
/// contain the required major.minor; a mismatch names both the found and
/// the required version.
pub fn evaluate_python(result: &CommandResult) -> DependencyStatus {
    if !result.success {
        return DependencyStatus::broken(format!(
            "Python not found or not executable: {}",
            result.stderr
        ));
    }
    if result.stdout.contains(&format!("Python {REQUIRED_PYTHON}")) {
        DependencyStatus::ok(&result.stdout)
    } else {
        DependencyStatus::broken(format!(
            "Found {}, but Python {} is required",
            result.stdout, REQUIRED_PYTHON
        ))
    }
}

/// Checks that the uv package manager is installed and working.
pub async fn check_uv<R: CommandRunner>(runner: &R) -> DependencyStatus {
    let result = runner.run(&cmd(["uv", "--version"]), None, PROBE_TIMEOUT).await;
    evaluate_tool("UV", &result)
}

/// Checks that git is installed and working.
pub async fn check_git<R: CommandRunner>(runner: &R) -> DependencyStatus {
    let result = runner
        .run(&cmd(["git", "--version"]), None, PROBE_TIMEOUT)
        .await;
    evaluate_tool("Git", &result)
}

/// Checks that the docker client is installed and working.
pub async fn check_docker<R: CommandRunner>(runner: &R) -> DependencyStatus {
    let result = runner
        .run(&cmd(["docker", "--version"]), None, PROBE_TIMEOUT)
        .await;
    evaluate_tool("Docker", &result)
}

/// Shared acceptance rule for plain version probes: exit success is
/// enough; on failure, a "not found" stderr is refined into a clearer
/// "not installed" message.
pub fn evaluate_tool(name: &str, result: &CommandResult) -> DependencyStatus {
    if !result.success {
        if result.stderr.contains("not found") {
            return DependencyStatus::broken(format!("{name} not installed"));
        }
        return DependencyStatus::broken(format!("{name} error: {}", result.stderr));
    }
    DependencyStatus::ok(&result.stdout)
}

/// Checks that the docker daemon is reachable.
pub async fn check_docker_daemon<R: CommandRunner>(runner: &R) -> DependencyStatus {
    let result = runner.run(&cmd(["docker", "info"]), None, PROBE_TIMEOUT).await;
    evaluate_docker_daemon(&result)
}

/// Acceptance rule for the daemon probe: distinguishes "daemon not
/// running" (connection refusals) from other docker errors.
pub fn evaluate_docker_daemon(result: &CommandResult) -> DependencyStatus {
    if !result.success {
        if result.stderr.contains("Cannot connect")
            || result.stderr.to_lowercase().contains("daemon")
        {
            return DependencyStatus::broken("Docker daemon is not running");
        }
        return DependencyStatus::broken(format!("Docker daemon error: {}", result.stderr));
    }
    DependencyStatus::ok("Docker daemon is running")
}

/// Runs every probe in declaration order and aggregates the results.
///
/// Non-short-circuit by design: a failing probe never prevents the later
/// ones from running, so the final table is always complete.
pub async fn perform_dependency_checks<R: CommandRunner>(runner: &R) -> CheckReport {
    info!("Running host dependency probes");
    let entries = vec![
        (
            format!("Python {REQUIRED_PYTHON}"),
            check_python(runner).await,
        ),
        ("UV".to_string(), check_uv(runner).await),
        ("Git".to_string(), check_git(runner).await),
        ("Docker".to_string(), check_docker(runner).await),
        ("Docker Daemon".to_string(), check_docker_daemon(runner).await),
    ];
    Report::from_entries(entries)
}
