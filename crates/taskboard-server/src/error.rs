use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use taskboard_database::error::TaskboardDatabaseError;
use taskboard_services::error::TaskboardServicesError;
use thiserror::Error;

use crate::utils::server_utils::handle_error;

pub type TaskboardServerResult<T = (), E = TaskboardServerError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum TaskboardServerError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    DatabaseError(#[from] TaskboardDatabaseError),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<TaskboardServicesError> for TaskboardServerError {
    fn from(error: TaskboardServicesError) -> Self {
        match error {
            TaskboardServicesError::Validation(message) => TaskboardServerError::Validation(message),
            e @ TaskboardServicesError::NotFound(_) => TaskboardServerError::NotFound(e.to_string()),
            TaskboardServicesError::DatabaseError(e) => TaskboardServerError::DatabaseError(e),
        }
    }
}

impl From<JsonRejection> for TaskboardServerError {
    fn from(rejection: JsonRejection) -> Self {
        TaskboardServerError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for TaskboardServerError {
    fn from(rejection: QueryRejection) -> Self {
        TaskboardServerError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for TaskboardServerError {
    fn from(rejection: PathRejection) -> Self {
        TaskboardServerError::Validation(rejection.body_text())
    }
}

impl IntoResponse for TaskboardServerError {
    fn into_response(self) -> Response {
        handle_error(self).into_response()
    }
}
