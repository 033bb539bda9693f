use std::{env, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use config::{Environment, File};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::canonicalize;

pub static CONFIG_INSTANCE: OnceLock<Settings> = OnceLock::new();

use crate::error::{TaskboardError, TaskboardResult};

/// Prefix for environment overrides, e.g. `TASKBOARD__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "TASKBOARD";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerArgs {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerArgs {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseArgs {
    /// Location of the SQLite file. Created on first start.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseArgs {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,

    #[serde(default = "ServerArgs::default")]
    pub server: ServerArgs,

    #[serde(default = "DatabaseArgs::default")]
    pub database: DatabaseArgs,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerArgs::default(),
            database: DatabaseArgs::default(),
        }
    }
}

pub fn get_config() -> TaskboardResult<&'static Settings> {
    CONFIG_INSTANCE
        .get()
        .ok_or(TaskboardError::ConfigUninitialized)
}

impl Settings {
    /// Builds settings from config files found around `root` plus `TASKBOARD__*`
    /// environment variables. `root` may also point directly at a settings file.
    pub fn from_root(root: Option<PathBuf>) -> TaskboardResult<Self> {
        let curr_dir = std::env::current_dir().context("unable to get working directory")?;
        let root = root.unwrap_or(curr_dir);
        let root = canonicalize(root).context("unable to canonicalize root directory")?;

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut s = config::Config::builder();
        if root.is_file() {
            s = s.add_source(File::from(root.as_path()));
        }
        let s = s
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(
                File::with_name(&root.join("config").to_string_lossy()).required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg = s.try_deserialize()?;
        Ok(cfg)
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("todo.db")
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}
