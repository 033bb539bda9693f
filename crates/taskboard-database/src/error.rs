use thiserror::Error;

pub type TaskboardDatabaseResult<T = (), E = TaskboardDatabaseError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum TaskboardDatabaseError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Unable to prepare database file {0}: {1}")]
    DatabaseFile(String, #[source] std::io::Error),
}
