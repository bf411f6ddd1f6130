//! # Food Truck CLI Configuration System
//!
//! File: cli/src/core/config.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Loads the optional user configuration for the Food Truck CLI and fills
//! in code-level defaults for everything that is not configured. The
//! configuration covers the two project repositories handled by `setup`,
//! the default clone target directory, and the containerized API service
//! managed by the `api` command group.
//!
//! ## Architecture
//!
//! - Configuration source: `config.toml` under the platform config
//!   directory for this application (e.g.
//!   `~/.config/foodtruck/config.toml`), located via `directories`'
//!   `ProjectDirs`. The file is optional; defaults apply when absent.
//! - User-supplied paths may use `~`, expanded via `shellexpand`.
//! - The merged configuration is validated before use and loaded once per
//!   command execution; CLI flags always take precedence over it.
//!
use crate::core::error::{FoodtruckError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Default repository URL for the Food Truck API project.
pub const DEFAULT_API_REPO: &str = "https://github.com/foodtruck-project/foodtruck-api.git";
/// Default repository URL for the Food Truck website project.
pub const DEFAULT_WEBSITE_REPO: &str =
    "https://github.com/foodtruck-project/foodtruck-website.git";

/// Top-level configuration structure, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub projects: ProjectsConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Settings for the `setup` command group.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Repository URL for the API project.
    #[serde(default = "default_api_repo")]
    pub api_repo: String,
    /// Repository URL for the website project.
    #[serde(default = "default_website_repo")]
    pub website_repo: String,
    /// Default directory repositories are cloned into (may use `~`).
    #[serde(default = "default_target_dir")]
    pub target_dir: String,
}

/// Settings for the `api` command group.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Container name filter used when querying the container engine.
    #[serde(default = "default_container_name")]
    pub container_name: String,
    /// Compose service name used for logs/exec.
    #[serde(default = "default_compose_service")]
    pub compose_service: String,
    /// Port the API service listens on.
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            api_repo: default_api_repo(),
            website_repo: default_website_repo(),
            target_dir: default_target_dir(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            container_name: default_container_name(),
            compose_service: default_compose_service(),
            port: default_api_port(),
        }
    }
}

fn default_api_repo() -> String {
    DEFAULT_API_REPO.to_string()
}
fn default_website_repo() -> String {
    DEFAULT_WEBSITE_REPO.to_string()
}
fn default_target_dir() -> String {
    "foodtruck-projects".to_string()
}
fn default_container_name() -> String {
    "foodtruck-api".to_string()
}
fn default_compose_service() -> String {
    "api".to_string()
}
fn default_api_port() -> u16 {
    8000
}

/// Loads the user configuration, falling back to defaults when no config
/// file exists.
pub fn load_config() -> Result<Config> {
    let mut config = match user_config_path() {
        Some(path) if path.exists() => {
            info!("Loading user configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        _ => {
            debug!("No user configuration file found, using defaults");
            Config::default()
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config)?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Path of the optional user config file, when the platform config
/// directory can be determined.
fn user_config_path() -> Option<std::path::PathBuf> {
    ProjectDirs::from("com", "FoodtruckProject", "foodtruck")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    parse_config(&content).with_context(|| format!("Failed to parse config file {:?}", path))
}

fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Expands `~` in configured paths.
fn expand_config_paths(config: &mut Config) {
    config.projects.target_dir = shellexpand::tilde(&config.projects.target_dir).into_owned();
}

/// Rejects configurations the commands cannot work with.
fn validate_config(config: &Config) -> Result<()> {
    if config.projects.api_repo.trim().is_empty() {
        anyhow::bail!(FoodtruckError::Config(
            "projects.api_repo must not be empty".to_string()
        ));
    }
    if config.projects.website_repo.trim().is_empty() {
        anyhow::bail!(FoodtruckError::Config(
            "projects.website_repo must not be empty".to_string()
        ));
    }
    if config.projects.target_dir.trim().is_empty() {
        anyhow::bail!(FoodtruckError::Config(
            "projects.target_dir must not be empty".to_string()
        ));
    }
    if config.api.container_name.trim().is_empty() {
        anyhow::bail!(FoodtruckError::Config(
            "api.container_name must not be empty".to_string()
        ));
    }
    Ok(())
}
