pub type TaskboardResult<T = (), E = TaskboardError> = Result<T, E>;

/// Errors raised while loading settings and bootstrapping the CLI. Each other
/// crate keeps its own error enum.
#[derive(Debug, thiserror::Error)]
pub enum TaskboardError {
    #[error("CLI error: {0}")]
    Cli(String),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Settings have not been loaded")]
    ConfigUninitialized,
    #[error("Runtime error: {0}")]
    Runtime(#[from] anyhow::Error),
}
