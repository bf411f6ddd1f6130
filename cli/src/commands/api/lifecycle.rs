//! # Food Truck CLI API Service Lifecycle (`commands::api::lifecycle`)
//!
//! File: cli/src/commands/api/lifecycle.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! The lifecycle core behind every `foodtruck api` subcommand: start,
//! stop, restart, status, logs, exec, and migrate for the containerized
//! API service. The CLI keeps no state of its own — the container runtime
//! is the source of truth, and [`ApiService::status`] re-derives the
//! service state on every call rather than caching it.
//!
//! ## Architecture
//!
//! - [`ApiService`] bundles the project path, the configured container
//!   name filter, compose service name, and port, plus the injected
//!   [`CommandRunner`].
//! - `status` asks the engine for a container matching the name filter
//!   (`docker ps --filter name=… --format {{.ID}}`) and, when found,
//!   inspects it for the process id.
//! - `start`/`stop` are idempotent: "already running" and "already
//!   stopped" are successes, not errors, so repeated invocations are
//!   safe. Readiness is a heuristic poll — a fixed grace sleep followed
//!   by a status re-check, not a health-endpoint probe.
//! - Every operation returns a [`ServiceOperationResult`]; unexpected
//!   failures (filesystem errors while preparing the env file, a pid
//!   that does not parse) are folded into failing results, never
//!   propagated as `Err`.
//!
//! ## Usage
//!
//! ```text
//! let service = ApiService::new(&SystemRunner, project_path, &cfg.api);
//! let result = service.start(false).await;
//! ```
//!
use crate::common::fs;
use crate::common::outcome::Outcome;
use crate::common::process::{
    cmd, run_streaming, CommandRunner, DEFAULT_TIMEOUT, PROBE_TIMEOUT,
};
use crate::core::config::ApiConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Grace period between `compose up` and the readiness re-check.
const START_GRACE: Duration = Duration::from_secs(5);
/// Grace period between `compose down` and the shutdown re-check.
const STOP_GRACE: Duration = Duration::from_secs(2);
/// Pause between a successful stop and the restart's start.
const RESTART_PAUSE: Duration = Duration::from_secs(1);

/// Default `.env` content synthesized when the project ships no
/// `.env.example`. Placeholder credentials only — fine for local
/// development, never for anything else.
const DEFAULT_ENV_TEMPLATE: &str = "\
# Food Truck API environment (generated by foodtruck-cli)
# Replace the placeholder secrets before deploying anywhere real.
DATABASE_URL=postgresql://foodtruck:foodtruck@db:5432/foodtruck
REDIS_URL=redis://redis:6379/0
SECRET_KEY=changeme-local-dev-secret
DEBUG=true
";

/// Point-in-time view of the service, derived from the container engine.
/// Never cached; every query re-derives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub is_running: bool,
    pub pid: Option<u32>,
    pub port: Option<u16>,
}

impl ServiceStatus {
    fn stopped() -> Self {
        Self {
            is_running: false,
            pid: None,
            port: None,
        }
    }
}

/// Uniform result type for every lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOperationResult {
    pub success: bool,
    pub message: String,
    /// Raw supporting output (captured logs, stderr detail). May be empty.
    pub details: String,
}

impl ServiceOperationResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            details: String::new(),
        }
    }

    fn ok_with(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            details: details.into(),
        }
    }

    fn failed(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            details: details.into(),
        }
    }
}

impl Outcome for ServiceOperationResult {
    fn ok(&self) -> bool {
        self.success
    }
    fn summary(&self) -> &str {
        &self.message
    }
}

/// Locates the API project directory, starting from `start`.
///
/// The current directory qualifies when it holds both `pyproject.toml`
/// and `docker-compose.yaml`; otherwise the well-known checkout
/// locations under `start` and its parent are probed.
pub fn find_api_project(start: &Path) -> Option<PathBuf> {
    if start.join("pyproject.toml").exists() && start.join("docker-compose.yaml").exists() {
        return Some(start.to_path_buf());
    }

    let mut candidates = vec![
        start.join("foodtruck-api"),
        start.join("foodtruck").join("foodtruck-api"),
    ];
    if let Some(parent) = start.parent() {
        candidates.push(parent.join("foodtruck-api"));
        candidates.push(parent.join("foodtruck").join("foodtruck-api"));
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.exists() && candidate.join("pyproject.toml").exists())
}

/// Lifecycle operations for the containerized API service.
pub struct ApiService<'a, R> {
    runner: &'a R,
    project_path: PathBuf,
    container_name: String,
    compose_service: String,
    port: u16,
}

impl<'a, R: CommandRunner> ApiService<'a, R> {
    pub fn new(runner: &'a R, project_path: PathBuf, api_cfg: &ApiConfig) -> Self {
        Self {
            runner,
            project_path,
            container_name: api_cfg.container_name.clone(),
            compose_service: api_cfg.compose_service.clone(),
            port: api_cfg.port,
        }
    }

    /// Queries the container engine for the service's current state.
    pub async fn status(&self) -> ServiceStatus {
        let name_filter = format!("name={}", self.container_name);
        let ps = self
            .runner
            .run(
                &cmd([
                    "docker",
                    "ps",
                    "--filter",
                    name_filter.as_str(),
                    "--format",
                    "{{.ID}}",
                ]),
                None,
                PROBE_TIMEOUT,
            )
            .await;

        if !ps.success {
            warn!("docker ps failed: {}", ps.stderr);
            return ServiceStatus::stopped();
        }
        let Some(container_id) = ps.stdout.lines().next().filter(|id| !id.is_empty()) else {
            return ServiceStatus::stopped();
        };

        // Container found; ask the engine for its process id. A failed or
        // unparsable inspect still counts as running, just without a pid.
        let inspect = self
            .runner
            .run(
                &cmd([
                    "docker",
                    "inspect",
                    "--format",
                    "{{.State.Pid}}",
                    container_id,
                ]),
                None,
                PROBE_TIMEOUT,
            )
            .await;
        let pid = if inspect.success {
            inspect.stdout.trim().parse::<u32>().ok()
        } else {
            debug!("docker inspect failed: {}", inspect.stderr);
            None
        };

        ServiceStatus {
            is_running: true,
            pid,
            port: Some(self.port),
        }
    }

    /// Starts the service. Idempotent: an already-running service is a
    /// success and the engine's "up" is not invoked again.
    pub async fn start(&self, build: bool) -> ServiceOperationResult {
        let status = self.status().await;
        if status.is_running {
            info!("API service already running");
            return ServiceOperationResult::ok_with(
                format!(
                    "API service is already running on port {}",
                    self.port
                ),
                describe_pid(&status),
            );
        }

        if let Err(e) = self.ensure_env_file() {
            return ServiceOperationResult::failed(
                "Failed to prepare the API .env file",
                e.to_string(),
            );
        }

        let mut up = cmd(["docker", "compose", "up", "-d"]);
        if build {
            up.push("--build".to_string());
        }
        let result = self
            .runner
            .run(&up, Some(&self.project_path), DEFAULT_TIMEOUT)
            .await;
        if !result.success {
            return ServiceOperationResult::failed("Failed to start API services", result.stderr);
        }

        // Heuristic readiness poll: wait out the grace period, then
        // re-derive the status once.
        tokio::time::sleep(START_GRACE).await;
        let status = self.status().await;
        if status.is_running {
            ServiceOperationResult::ok_with(
                format!("API services started on port {}", self.port),
                describe_pid(&status),
            )
        } else {
            ServiceOperationResult::failed(
                "API service did not come up",
                format!(
                    "Status re-check after {} seconds reported the service as not running",
                    START_GRACE.as_secs()
                ),
            )
        }
    }

    /// Stops the service. Idempotent: an already-stopped service is a
    /// success and the engine's "down" is not invoked.
    pub async fn stop(&self) -> ServiceOperationResult {
        let status = self.status().await;
        if !status.is_running {
            info!("API service already stopped");
            return ServiceOperationResult::ok("API service is already stopped");
        }

        let result = self
            .runner
            .run(
                &cmd(["docker", "compose", "down"]),
                Some(&self.project_path),
                DEFAULT_TIMEOUT,
            )
            .await;
        if !result.success {
            return ServiceOperationResult::failed("Failed to stop API services", result.stderr);
        }

        tokio::time::sleep(STOP_GRACE).await;
        if self.status().await.is_running {
            ServiceOperationResult::failed(
                "API container is still running after the stop command",
                String::new(),
            )
        } else {
            ServiceOperationResult::ok("API services stopped")
        }
    }

    /// Stop, short pause, start. The first failure is propagated as the
    /// restart's result.
    pub async fn restart(&self) -> ServiceOperationResult {
        let stopped = self.stop().await;
        if !stopped.success {
            return stopped;
        }
        tokio::time::sleep(RESTART_PAUSE).await;
        self.start(false).await
    }

    /// Fetches the service logs. Requires a running service.
    ///
    /// Without `follow`, the tail is captured and returned as `details`;
    /// with `follow`, the stream is attached to the user's terminal.
    pub async fn logs(&self, lines: u32, follow: bool) -> ServiceOperationResult {
        if !self.status().await.is_running {
            return not_running_failure();
        }

        let tail = lines.to_string();
        let mut argv = cmd(["docker", "compose", "logs", "--tail", tail.as_str()]);
        if follow {
            argv.push("-f".to_string());
            let result = run_streaming(&argv, Some(&self.project_path)).await;
            return if result.success {
                ServiceOperationResult::ok("Log stream ended")
            } else {
                ServiceOperationResult::failed("Failed to follow API logs", result.stderr)
            };
        }

        let result = self
            .runner
            .run(&argv, Some(&self.project_path), DEFAULT_TIMEOUT)
            .await;
        if result.success {
            ServiceOperationResult::ok_with(
                format!("Showing last {lines} log lines"),
                result.stdout,
            )
        } else {
            ServiceOperationResult::failed("Failed to fetch API logs", result.stderr)
        }
    }

    /// Forwards an arbitrary command into the running service container.
    pub async fn exec(&self, command: &[String]) -> ServiceOperationResult {
        if command.is_empty() {
            return ServiceOperationResult::failed("No command provided to exec", String::new());
        }
        if !self.status().await.is_running {
            return not_running_failure();
        }

        let mut argv = cmd(["docker", "compose", "exec", self.compose_service.as_str()]);
        argv.extend(command.iter().cloned());
        let result = self
            .runner
            .run(&argv, Some(&self.project_path), DEFAULT_TIMEOUT)
            .await;
        if result.success {
            ServiceOperationResult::ok_with("Command executed in API container", result.stdout)
        } else {
            ServiceOperationResult::failed("Command failed in API container", result.stderr)
        }
    }

    /// Prepares the project's Python environment: creates the virtual
    /// environment when missing, then syncs dependencies. Used by both
    /// `api setup` and `api install`; neither touches the container.
    pub async fn install(&self) -> ServiceOperationResult {
        if !self.project_path.join(".venv").exists() {
            let venv = self
                .runner
                .run(
                    &cmd(["uv", "venv"]),
                    Some(&self.project_path),
                    DEFAULT_TIMEOUT,
                )
                .await;
            if !venv.success {
                return ServiceOperationResult::failed(
                    "Failed to create the virtual environment",
                    venv.stderr,
                );
            }
        } else {
            debug!("Virtual environment already exists, skipping creation");
        }

        let sync = self
            .runner
            .run(
                &cmd(["uv", "sync"]),
                Some(&self.project_path),
                DEFAULT_TIMEOUT,
            )
            .await;
        if sync.success {
            ServiceOperationResult::ok("Dependencies installed")
        } else {
            ServiceOperationResult::failed("Failed to install dependencies", sync.stderr)
        }
    }

    /// Runs the schema migrations inside the running container.
    pub async fn migrate(&self) -> ServiceOperationResult {
        let result = self
            .exec(&cmd(["alembic", "upgrade", "head"]))
            .await;
        if result.success {
            ServiceOperationResult::ok_with("Database migrations completed", result.details)
        } else {
            result
        }
    }

    /// Makes sure the project has a `.env` file before the first start.
    ///
    /// Copies the project's own `.env.example`; when the project ships
    /// none, a placeholder template is written as `.env.example` first
    /// so the expected shape is visible, then copied. An existing
    /// `.env` is never touched.
    fn ensure_env_file(&self) -> crate::core::error::Result<()> {
        let env_path = self.project_path.join(".env");
        if env_path.exists() {
            debug!(".env already present at {:?}", env_path);
            return Ok(());
        }

        let example_path = self.project_path.join(".env.example");
        if !example_path.exists() {
            info!("Creating .env.example with placeholder values");
            fs::write_string_to_file(&example_path, DEFAULT_ENV_TEMPLATE)?;
        }
        info!("Creating .env from .env.example");
        let content = fs::read_file_to_string(&example_path)?;
        fs::write_string_to_file(&env_path, &content)
    }
}

/// Failure returned by operations that need a running service.
fn not_running_failure() -> ServiceOperationResult {
    ServiceOperationResult::failed(
        "API service is not running",
        "Start it with: foodtruck api start".to_string(),
    )
}

fn describe_pid(status: &ServiceStatus) -> String {
    match status.pid {
        Some(pid) => format!("PID {pid}"),
        None => String::new(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::testing::ScriptedRunner;
    use crate::common::process::CommandResult;
    use tempfile::tempdir;

    fn ok_result(stdout: &str) -> CommandResult {
        CommandResult {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    fn service<'a>(runner: &'a ScriptedRunner, path: &Path) -> ApiService<'a, ScriptedRunner> {
        ApiService::new(runner, path.to_path_buf(), &ApiConfig::default())
    }

    /// No matching container means not running, with no pid or port.
    #[tokio::test]
    async fn test_status_not_running() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new().respond("docker ps", ok_result(""));
        let status = service(&runner, dir.path()).status().await;
        assert_eq!(status, ServiceStatus::stopped());
    }

    /// A matching container yields running with the inspected pid and
    /// the configured port.
    #[tokio::test]
    async fn test_status_running_with_pid() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"));
        let status = service(&runner, dir.path()).status().await;
        assert!(status.is_running);
        assert_eq!(status.pid, Some(4242));
        assert_eq!(status.port, Some(8000));
    }

    /// An unparsable pid degrades to running-without-pid, not a failure.
    #[tokio::test]
    async fn test_status_running_bad_pid() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("not-a-pid"));
        let status = service(&runner, dir.path()).status().await;
        assert!(status.is_running);
        assert_eq!(status.pid, None);
    }

    /// Starting an already-running service succeeds immediately and the
    /// engine's "up" is never invoked.
    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"));
        let svc = service(&runner, dir.path());

        let first = svc.start(false).await;
        let second = svc.start(false).await;
        assert!(first.success && second.success);
        assert!(second.message.contains("already running"));
        assert_eq!(runner.count_calls("docker compose up"), 0);
    }

    /// A cold start runs "up", waits out the grace period, and succeeds
    /// once the re-check sees the container.
    #[tokio::test(start_paused = true)]
    async fn test_start_cold_success() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            // First status query: nothing running; re-check: container up.
            .respond("docker ps", ok_result(""))
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"));
        let result = service(&runner, dir.path()).start(false).await;
        assert!(result.success, "got: {:?}", result);
        assert!(result.message.contains("8000"));
        assert_eq!(runner.count_calls("docker compose up -d"), 1);
        // The env file was synthesized before the start.
        assert!(dir.path().join(".env").exists());
    }

    /// `--build` is forwarded to compose.
    #[tokio::test(start_paused = true)]
    async fn test_start_with_build_flag() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result(""))
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("7"));
        service(&runner, dir.path()).start(true).await;
        assert_eq!(runner.count_calls("docker compose up -d --build"), 1);
    }

    /// A failed "up" surfaces the engine's stderr.
    #[tokio::test(start_paused = true)]
    async fn test_start_up_failure() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result(""))
            .respond("docker compose up", CommandResult::failure("port in use"));
        let result = service(&runner, dir.path()).start(false).await;
        assert!(!result.success);
        assert_eq!(result.details, "port in use");
    }

    /// A start whose re-check still sees nothing running is a failure
    /// naming the grace period.
    #[tokio::test(start_paused = true)]
    async fn test_start_grace_period_expires() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new().respond("docker ps", ok_result(""));
        let result = service(&runner, dir.path()).start(false).await;
        assert!(!result.success);
        assert!(result.details.contains("5 seconds"));
    }

    /// Stopping a stopped service succeeds without invoking "down".
    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new().respond("docker ps", ok_result(""));
        let result = service(&runner, dir.path()).stop().await;
        assert!(result.success);
        assert!(result.message.contains("already stopped"));
        assert_eq!(runner.count_calls("docker compose down"), 0);
    }

    /// A clean stop re-checks and reports success.
    #[tokio::test(start_paused = true)]
    async fn test_stop_success() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker ps", ok_result(""))
            .respond("docker inspect", ok_result("4242"));
        let result = service(&runner, dir.path()).stop().await;
        assert!(result.success);
        assert_eq!(runner.count_calls("docker compose down"), 1);
    }

    /// A container that survives "down" is reported as a failure.
    #[tokio::test(start_paused = true)]
    async fn test_stop_still_running() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"));
        let result = service(&runner, dir.path()).stop().await;
        assert!(!result.success);
        assert!(result.message.contains("still running"));
    }

    /// Restart propagates a stop failure and never attempts the start.
    #[tokio::test(start_paused = true)]
    async fn test_restart_propagates_stop_failure() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"))
            .respond("docker compose down", CommandResult::failure("compose broke"));
        let result = service(&runner, dir.path()).restart().await;
        assert!(!result.success);
        assert_eq!(result.details, "compose broke");
        assert_eq!(runner.count_calls("docker compose up"), 0);
    }

    /// Logs require a running service.
    #[tokio::test]
    async fn test_logs_require_running() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new().respond("docker ps", ok_result(""));
        let result = service(&runner, dir.path()).logs(50, false).await;
        assert!(!result.success);
        assert!(result.message.contains("not running"));
        assert_eq!(runner.count_calls("docker compose logs"), 0);
    }

    /// Captured logs land in `details` with the requested tail length.
    #[tokio::test]
    async fn test_logs_captured() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"))
            .respond("docker compose logs", ok_result("line1\nline2"));
        let result = service(&runner, dir.path()).logs(25, false).await;
        assert!(result.success);
        assert_eq!(result.details, "line1\nline2");
        assert_eq!(runner.count_calls("docker compose logs --tail 25"), 1);
    }

    /// Exec forwards the command into the compose service.
    #[tokio::test]
    async fn test_exec_forwards_command() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"));
        let result = service(&runner, dir.path())
            .exec(&cmd(["pytest", "-q"]))
            .await;
        assert!(result.success);
        assert_eq!(runner.count_calls("docker compose exec api pytest -q"), 1);
    }

    /// Install creates the venv only when missing, then syncs.
    #[tokio::test]
    async fn test_install_creates_venv_once() {
        let runner = ScriptedRunner::new();

        let dir = tempdir().unwrap();
        let result = service(&runner, dir.path()).install().await;
        assert!(result.success);
        assert_eq!(runner.count_calls("uv venv"), 1);
        assert_eq!(runner.count_calls("uv sync"), 1);

        // With an existing .venv, only the sync runs.
        let runner = ScriptedRunner::new();
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".venv")).unwrap();
        let result = service(&runner, dir.path()).install().await;
        assert!(result.success);
        assert_eq!(runner.count_calls("uv venv"), 0);
        assert_eq!(runner.count_calls("uv sync"), 1);
    }

    /// A failed venv creation short-circuits the sync.
    #[tokio::test]
    async fn test_install_venv_failure_skips_sync() {
        let dir = tempdir().unwrap();
        let runner =
            ScriptedRunner::new().respond("uv venv", CommandResult::failure("uv exploded"));
        let result = service(&runner, dir.path()).install().await;
        assert!(!result.success);
        assert_eq!(result.details, "uv exploded");
        assert_eq!(runner.count_calls("uv sync"), 0);
    }

    /// Migrate is a fixed exec of the schema-migration command.
    #[tokio::test]
    async fn test_migrate_runs_alembic() {
        let dir = tempdir().unwrap();
        let runner = ScriptedRunner::new()
            .respond("docker ps", ok_result("abc123"))
            .respond("docker inspect", ok_result("4242"));
        let result = service(&runner, dir.path()).migrate().await;
        assert!(result.success);
        assert_eq!(
            runner.count_calls("docker compose exec api alembic upgrade head"),
            1
        );
    }

    /// The env file preparation prefers `.env.example`, synthesizes a
    /// template otherwise, and never overwrites an existing `.env`.
    #[tokio::test]
    async fn test_ensure_env_file_variants() {
        let runner = ScriptedRunner::new();

        // From example.
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".env.example"), "FROM_EXAMPLE=1\n").unwrap();
        service(&runner, dir.path()).ensure_env_file().unwrap();
        let written = std::fs::read_to_string(dir.path().join(".env")).unwrap();
        assert_eq!(written, "FROM_EXAMPLE=1\n");

        // No example: the template is written as .env.example and copied.
        let dir = tempdir().unwrap();
        service(&runner, dir.path()).ensure_env_file().unwrap();
        let written = std::fs::read_to_string(dir.path().join(".env")).unwrap();
        assert!(written.contains("SECRET_KEY=changeme"));
        assert!(dir.path().join(".env.example").exists());

        // Existing file is left alone.
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "KEEP=me\n").unwrap();
        service(&runner, dir.path()).ensure_env_file().unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".env")).unwrap(),
            "KEEP=me\n"
        );
    }

    /// Project discovery: compose project in place, then well-known
    /// checkout locations, then nothing.
    #[test]
    fn test_find_api_project() {
        // The start dir itself qualifies with both marker files.
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), "").unwrap();
        std::fs::write(dir.path().join("docker-compose.yaml"), "").unwrap();
        assert_eq!(find_api_project(dir.path()), Some(dir.path().to_path_buf()));

        // A checkout under the start dir qualifies via pyproject.toml.
        let dir = tempdir().unwrap();
        let checkout = dir.path().join("foodtruck-api");
        std::fs::create_dir(&checkout).unwrap();
        std::fs::write(checkout.join("pyproject.toml"), "").unwrap();
        assert_eq!(find_api_project(dir.path()), Some(checkout));

        // Nothing anywhere.
        let dir = tempdir().unwrap();
        let inner = dir.path().join("empty");
        std::fs::create_dir(&inner).unwrap();
        assert_eq!(find_api_project(&inner), None);
    }
}
