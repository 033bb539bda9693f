use chrono::{NaiveDate, NaiveDateTime};
use taskboard_common::{debug, info};
use taskboard_database::{
    schema::{CreateTodoRequest, UpdateTodoRequest},
    todo::{NewTodo, Todo, TodoStatus},
    todo_repo, AppDatabase,
};

use crate::error::{
    TaskboardServicesError, TaskboardServicesResult, INVALID_DUE_DATE, STATUS_NOT_NULL,
    TITLE_REQUIRED,
};

pub async fn create_todo(
    db: &AppDatabase,
    request: CreateTodoRequest,
) -> TaskboardServicesResult<Todo> {
    let new_todo = validate_new_todo(request).inspect_err(|e| debug!("Rejected todo: {}", e))?;
    let todo = todo_repo::insert_todo(db.get_pool(), new_todo).await?;
    info!("Created todo {}", todo.id);

    Ok(todo)
}

/// Applies the keys present in `request` to todo `id`. The read, the checks
/// and the write share one transaction, so a rejected payload leaves the row
/// untouched.
pub async fn update_todo(
    db: &AppDatabase,
    id: i64,
    request: UpdateTodoRequest,
) -> TaskboardServicesResult<Todo> {
    let mut tx = db.get_pool().begin().await?;

    let mut todo = todo_repo::find_todo(&mut *tx, id)
        .await?
        .ok_or(TaskboardServicesError::NotFound(id))?;
    apply_update(&mut todo, request).inspect_err(|e| debug!("Rejected update of {}: {}", id, e))?;

    let updated = todo_repo::update_todo(&mut *tx, &todo)
        .await?
        .ok_or(TaskboardServicesError::NotFound(id))?;
    tx.commit().await?;
    info!("Updated todo {}", id);

    Ok(updated)
}

pub async fn delete_todo(db: &AppDatabase, id: i64) -> TaskboardServicesResult<()> {
    if !todo_repo::delete_todo(db.get_pool(), id).await? {
        return Err(TaskboardServicesError::NotFound(id));
    }
    info!("Deleted todo {}", id);

    Ok(())
}

fn validate_new_todo(request: CreateTodoRequest) -> TaskboardServicesResult<NewTodo> {
    let title = require_title(request.title.as_deref().unwrap_or_default())?;
    let status = request
        .status
        .filter(|status| !status.is_empty())
        .unwrap_or_else(|| TodoStatus::default().to_string());
    let due_date = parse_due_date(request.due_date.as_deref())?;

    Ok(NewTodo {
        title,
        description: request.description,
        status,
        due_date,
    })
}

fn apply_update(todo: &mut Todo, request: UpdateTodoRequest) -> TaskboardServicesResult<()> {
    // `"title": null` leaves the title alone.
    if let Some(Some(title)) = request.title {
        todo.title = require_title(&title)?;
    }
    if let Some(description) = request.description {
        todo.description = description;
    }
    if let Some(status) = request.status {
        todo.status = status.ok_or_else(|| TaskboardServicesError::validation(STATUS_NOT_NULL))?;
    }
    if let Some(due_date) = request.due_date {
        todo.due_date = parse_due_date(due_date.as_deref())?;
    }

    Ok(())
}

fn require_title(title: &str) -> TaskboardServicesResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskboardServicesError::validation(TITLE_REQUIRED));
    }
    Ok(title.to_string())
}

/// `None` and `""` mean "no due date". Accepts `YYYY-MM-DD`, or an ISO
/// date-time whose time part is dropped.
pub fn parse_due_date(value: Option<&str>) -> TaskboardServicesResult<Option<NaiveDate>> {
    let value = match value {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };
    let invalid = || TaskboardServicesError::validation(INVALID_DUE_DATE);

    // chrono alone takes `2025-3-1`, leading blanks and signed years. Stored
    // dates sort as text, so only the fixed-width form gets through.
    if !value.get(..10).is_some_and(is_iso_date) {
        return Err(invalid());
    }

    let date = if value.len() == 10 {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?
    } else {
        value
            .parse::<NaiveDateTime>()
            .map_err(|_| invalid())?
            .date()
    };
    Ok(Some(date))
}

fn is_iso_date(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}
