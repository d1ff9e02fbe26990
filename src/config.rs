//! Service configuration, loaded from a JSON file.
//!
//! The file path comes from `CONFIG_PATH`, falling back to the `--config` flag. `ENV`, when set,
//! overrides the file's `env` field. A `.env` file in the working directory is read first.

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config path is not set")]
    PathNotSet,
    #[error("config file doesn't exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("can not read config file {}: {}", .path.display(), .message)]
    Read { path: PathBuf, message: String },
    #[error("config field '{0}' is required")]
    MissingField(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "students-api", version, about)]
pub struct Cli {
    /// Path to the JSON configuration file (ignored when CONFIG_PATH is set)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Listen address, e.g. "localhost:8082".
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Environment name ("dev", "production", ...). Informational only.
    #[serde(default)]
    pub env: String,
    /// SQLite database file.
    pub storage_path: PathBuf,
    pub http_server: HttpServerConfig,
    /// Pool size override; sqlx default when absent.
    #[serde(default)]
    pub max_connections: Option<u32>,
}

impl Config {
    /// Resolve the path from the environment or command line, then read the file.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let path = resolve_path(load_env_optional("CONFIG_PATH"), || Cli::parse().config)?;
        let mut config = Self::from_file(&path)?;
        if let Some(env) = load_env_optional("ENV") {
            config.env = env;
        }
        config.check()?;
        tracing::debug!(
            path = %path.display(),
            env = %config.env,
            storage_path = %config.storage_path.display(),
            address = %config.http_server.address,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Read and parse `path` without consulting the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let read_err = |message: String| ConfigError::Read {
            path: path.to_path_buf(),
            message,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| read_err(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| read_err(e.to_string()))
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.env.trim().is_empty() {
            return Err(ConfigError::MissingField("env"));
        }
        if self.storage_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("storage_path"));
        }
        if self.http_server.address.trim().is_empty() {
            return Err(ConfigError::MissingField("http_server.address"));
        }
        Ok(())
    }
}

/// The environment wins; the flag is only parsed when the environment has nothing.
fn resolve_path(
    from_env: Option<String>,
    from_flag: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    match from_env {
        Some(p) => Ok(PathBuf::from(p)),
        None => from_flag().ok_or(ConfigError::PathNotSet),
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
