//! # Food Truck CLI Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! This module is the single entry point for running external commands
//! (git, uv, docker, carapace) from the Food Truck CLI. Every invocation
//! goes through the [`CommandRunner`] trait and comes back as a
//! [`CommandResult`] — a plain data value carrying the success flag,
//! captured output, and exit code. No failure mode escapes as a panic or
//! an `Err`: a missing executable, a permission error, a timeout, and a
//! non-zero exit are all normalized into a failing `CommandResult` so the
//! orchestration layers above can chain and report outcomes uniformly.
//!
//! ## Architecture
//!
//! - [`CommandRunner`]: the seam between orchestration logic and the
//!   operating system. Command handlers are generic over it, which lets
//!   unit tests drive the setup/check/api flows with a scripted double
//!   instead of spawning real processes.
//! - [`SystemRunner`]: the production implementation backed by
//!   `tokio::process::Command` with a hard per-invocation timeout
//!   enforced by `tokio::time::timeout`.
//! - [`run_streaming`]: a special-case launcher for commands whose output
//!   should go straight to the user's terminal (e.g. `docker compose
//!   logs --follow`), where capturing would block indefinitely.
//!
//! ## Usage
//!
//! ```text
//! let runner = SystemRunner;
//! let result = runner
//!     .run(&cmd(["git", "clone", url, dest]), None, DEFAULT_TIMEOUT)
//!     .await;
//! if !result.success {
//!     // result.stderr carries the human-readable failure detail.
//! }
//! ```
//!
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Timeout applied to general commands (clone, dependency sync, compose up).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout applied to lightweight version probes (`git --version` etc.).
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a single external command invocation.
///
/// Produced once per invocation and never mutated afterwards. On failure,
/// `stderr` always carries a human-readable message: the trimmed stderr of
/// the process when there was one, otherwise a synthetic description of
/// what went wrong (missing executable, timeout, exit code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// True only for a clean exit with status code 0.
    pub success: bool,
    /// Captured standard output, whitespace-trimmed.
    pub stdout: String,
    /// Captured standard error (trimmed), or a synthetic failure message.
    pub stderr: String,
    /// Process exit code; `-1` when the process never produced one
    /// (spawn failure, timeout, killed by signal).
    pub exit_code: i32,
}

impl CommandResult {
    /// Constructs a failing result with a synthetic message and no output.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: message.into(),
            exit_code: -1,
        }
    }
}

/// Builds an owned argv list from string-ish parts.
///
/// Purely a convenience so call sites can write
/// `cmd(["docker", "compose", "up", "-d"])`.
pub fn cmd<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}

/// Renders an argv list for log and error messages.
pub fn render(cmd: &[String]) -> String {
    cmd.join(" ")
}

/// The seam between orchestration logic and the operating system.
///
/// The contract is deliberately narrow: argv list in, [`CommandResult`]
/// out. Implementations must never return an error or panic for expected
/// failure modes; everything is folded into the result.
pub trait CommandRunner {
    /// Runs `cmd` to completion (or until `timeout`), capturing output.
    fn run(
        &self,
        cmd: &[String],
        cwd: Option<&Path>,
        timeout: Duration,
    ) -> impl Future<Output = CommandResult> + Send;
}

/// Production [`CommandRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, cmd: &[String], cwd: Option<&Path>, timeout: Duration) -> CommandResult {
        // Fail fast on an empty argv without touching the OS.
        let Some(program) = cmd.first() else {
            warn!("run() called with an empty command");
            return CommandResult::failure("No command provided");
        };

        let mut command = Command::new(program);
        command
            .args(&cmd[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // If the timeout drops the wait future below, the child must
            // not be left running.
            .kill_on_drop(true);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        debug!(
            "Running '{}' (cwd: {:?}, timeout: {:?})",
            render(cmd),
            cwd,
            timeout
        );

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => return spawn_failure(program, cmd, &e),
        };

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => finish(cmd, &output),
            Ok(Err(e)) => CommandResult::failure(format!(
                "Unexpected error running '{}': {}",
                render(cmd),
                e
            )),
            Err(_) => CommandResult::failure(format!(
                "Command '{}' timed out after {} seconds",
                render(cmd),
                timeout.as_secs()
            )),
        }
    }
}

/// Runs a command with stdio inherited from the CLI process.
///
/// Used for long-lived, user-facing streams such as
/// `docker compose logs --follow`, where capturing output would block
/// until the stream ends. No timeout is applied; the user terminates the
/// stream themselves (Ctrl-C).
pub async fn run_streaming(cmd: &[String], cwd: Option<&Path>) -> CommandResult {
    let Some(program) = cmd.first() else {
        return CommandResult::failure("No command provided");
    };

    let mut command = Command::new(program);
    command.args(&cmd[1..]);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!("Streaming '{}' (cwd: {:?})", render(cmd), cwd);

    match command.status().await {
        Ok(status) => {
            let exit_code = status.code().unwrap_or(-1);
            if status.success() {
                CommandResult {
                    success: true,
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code,
                }
            } else {
                CommandResult {
                    success: false,
                    stdout: String::new(),
                    stderr: format!("Command failed with exit code {exit_code}"),
                    exit_code,
                }
            }
        }
        Err(e) => spawn_failure(program, cmd, &e),
    }
}

/// Maps a spawn-time OS error into the appropriate failure result.
///
/// Distinguishes "not found" (a PATH problem the user can fix) from
/// "permission denied" and from genuinely unexpected errors.
fn spawn_failure(program: &str, cmd: &[String], e: &std::io::Error) -> CommandResult {
    match e.kind() {
        std::io::ErrorKind::NotFound => CommandResult::failure(format!(
            "Command '{program}' not found. Please ensure it's installed and in your PATH"
        )),
        std::io::ErrorKind::PermissionDenied => {
            CommandResult::failure(format!("Permission denied when running '{}'", render(cmd)))
        }
        _ => CommandResult::failure(format!(
            "Unexpected error running '{}': {}",
            render(cmd),
            e
        )),
    }
}

/// Converts a completed process into a [`CommandResult`].
fn finish(cmd: &[String], output: &std::process::Output) -> CommandResult {
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if output.status.success() {
        CommandResult {
            success: true,
            stdout,
            stderr,
            exit_code,
        }
    } else {
        debug!("'{}' failed with exit code {}", render(cmd), exit_code);
        // Non-zero exit: surface the process's own stderr when it said
        // anything, otherwise synthesize a message embedding the code.
        let stderr = if stderr.is_empty() {
            format!("Command failed with exit code {exit_code}")
        } else {
            stderr
        };
        CommandResult {
            success: false,
            stdout,
            stderr,
            exit_code,
        }
    }
}
