use taskboard_database::error::TaskboardDatabaseError;
use thiserror::Error;

pub type TaskboardServicesResult<T = (), E = TaskboardServicesError> = Result<T, E>;

pub const TITLE_REQUIRED: &str = "title is required";
pub const INVALID_DUE_DATE: &str = "invalid due_date format, use YYYY-MM-DD";
pub const STATUS_NOT_NULL: &str = "status must be a string";

#[derive(Debug, Error)]
pub enum TaskboardServicesError {
    /// Bad or missing input. Nothing was written.
    #[error("{0}")]
    Validation(String),

    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] TaskboardDatabaseError),
}

impl TaskboardServicesError {
    pub fn validation(message: impl Into<String>) -> Self {
        TaskboardServicesError::Validation(message.into())
    }
}

impl From<sqlx::Error> for TaskboardServicesError {
    fn from(error: sqlx::Error) -> Self {
        TaskboardServicesError::DatabaseError(error.into())
    }
}
