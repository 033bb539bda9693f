use taskboard_common::error::TaskboardError;
use thiserror::Error;

pub type TaskboardCliResult<T = (), E = TaskboardCliError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum TaskboardCliError {
    #[error("Unable to initialize config: {0}")]
    InitConfig(String),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<TaskboardError> for TaskboardCliError {
    fn from(error: TaskboardError) -> Self {
        match error {
            TaskboardError::Config(e) => TaskboardCliError::InitConfig(e.to_string()),
            e => TaskboardCliError::Runtime(e.to_string()),
        }
    }
}

impl From<taskboard_server::error::TaskboardServerError> for TaskboardCliError {
    fn from(error: taskboard_server::error::TaskboardServerError) -> Self {
        TaskboardCliError::Server(error.to_string())
    }
}

impl From<taskboard_database::error::TaskboardDatabaseError> for TaskboardCliError {
    fn from(error: taskboard_database::error::TaskboardDatabaseError) -> Self {
        TaskboardCliError::Database(error.to_string())
    }
}
