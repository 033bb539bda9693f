use axum::http::StatusCode;
use serde_json::json;
use taskboard_common::error;

use crate::error::TaskboardServerError;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Maps an error onto its status code and `{"error": ...}` body. Causes of
/// internal errors are logged, not returned.
pub fn handle_error(err: TaskboardServerError) -> (StatusCode, axum::Json<serde_json::Value>) {
    let status = match &err {
        TaskboardServerError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskboardServerError::NotFound(_) => StatusCode::NOT_FOUND,
        TaskboardServerError::DatabaseError(_)
        | TaskboardServerError::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Request failed: {}", err);
        INTERNAL_ERROR_MESSAGE.to_string()
    } else {
        err.to_string()
    };

    (status, axum::Json(json!({ "error": message })))
}
