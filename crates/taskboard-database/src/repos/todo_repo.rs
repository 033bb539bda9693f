use sqlx::SqliteExecutor;

use crate::{
    error::TaskboardDatabaseResult,
    todo::{NewTodo, Todo},
};

pub async fn insert_todo<'e, E>(executor: E, todo: NewTodo) -> TaskboardDatabaseResult<Todo>
where
    E: SqliteExecutor<'e>,
{
    let new_todo = sqlx::query_as::<_, Todo>(
        r#"INSERT INTO todos (title, description, status, due_date, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *"#,
    )
    .bind(todo.title)
    .bind(todo.description)
    .bind(todo.status)
    .bind(todo.due_date)
    .bind(chrono::Utc::now())
    .fetch_one(executor)
    .await?;

    Ok(new_todo)
}

pub async fn find_todo<'e, E>(executor: E, id: i64) -> TaskboardDatabaseResult<Option<Todo>>
where
    E: SqliteExecutor<'e>,
{
    let todo = sqlx::query_as::<_, Todo>(r#"SELECT * FROM todos WHERE id = ?"#)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(todo)
}

/// Lists every todo, or only those whose title or description contains
/// `keyword` (case-sensitive). Dated rows come first in ascending order,
/// undated rows last; `id` keeps ties stable.
pub async fn list_todos<'e, E>(
    executor: E,
    keyword: Option<&str>,
) -> TaskboardDatabaseResult<Vec<Todo>>
where
    E: SqliteExecutor<'e>,
{
    let todos = match keyword {
        None => {
            sqlx::query_as::<_, Todo>(
                r#"SELECT * FROM todos
                    ORDER BY due_date IS NULL, due_date ASC, id ASC"#,
            )
            .fetch_all(executor)
            .await?
        }
        Some(keyword) => {
            // instr() is case-sensitive, unlike LIKE.
            sqlx::query_as::<_, Todo>(
                r#"SELECT * FROM todos
                    WHERE instr(title, ?) > 0 OR instr(COALESCE(description, ''), ?) > 0
                    ORDER BY due_date IS NULL, due_date ASC, id ASC"#,
            )
            .bind(keyword)
            .bind(keyword)
            .fetch_all(executor)
            .await?
        }
    };

    Ok(todos)
}

/// Writes every mutable column of `todo`. Returns `None` when the row is gone.
pub async fn update_todo<'e, E>(executor: E, todo: &Todo) -> TaskboardDatabaseResult<Option<Todo>>
where
    E: SqliteExecutor<'e>,
{
    let updated = sqlx::query_as::<_, Todo>(
        r#"UPDATE todos
            SET title = ?, description = ?, status = ?, due_date = ?
            WHERE id = ?
            RETURNING *"#,
    )
    .bind(&todo.title)
    .bind(&todo.description)
    .bind(&todo.status)
    .bind(todo.due_date)
    .bind(todo.id)
    .fetch_optional(executor)
    .await?;

    Ok(updated)
}

/// Returns `false` when no row had that id.
pub async fn delete_todo<'e, E>(executor: E, id: i64) -> TaskboardDatabaseResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(r#"DELETE FROM todos WHERE id = ?"#)
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_todos<'e, E>(executor: E) -> TaskboardDatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM todos"#)
        .fetch_one(executor)
        .await?;

    Ok(count)
}

/// Exact, case-sensitive match on `status`.
pub async fn count_todos_by_status<'e, E>(executor: E, status: &str) -> TaskboardDatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM todos WHERE status = ?"#)
        .bind(status)
        .fetch_one(executor)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskboard_common::settings::DatabaseArgs;
    use tempfile::TempDir;

    use super::*;
    use crate::{database::get_app_database, AppDatabase};

    async fn test_db() -> (AppDatabase, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let args = DatabaseArgs {
            path: dir.path().join("todo.db"),
            ..DatabaseArgs::default()
        };
        let db = get_app_database(&args).await.unwrap();
        (db, dir)
    }

    fn new_todo(title: &str, description: Option<&str>, due: Option<&str>) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: description.map(str::to_string),
            status: "ToDo".to_string(),
            due_date: due.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let (db, _dir) = test_db().await;
        let created = insert_todo(
            db.get_pool(),
            new_todo("Buy milk", Some("2 litres"), Some("2025-03-10")),
        )
        .await
        .unwrap();

        assert!(created.id > 0);
        let found = find_todo(db.get_pool(), created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.description.as_deref(), Some("2 litres"));
        assert_eq!(found.due_date, NaiveDate::from_ymd_opt(2025, 3, 10));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let (db, _dir) = test_db().await;
        assert!(find_todo(db.get_pool(), 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_undated_last() {
        let (db, _dir) = test_db().await;
        let pool = db.get_pool();
        insert_todo(pool, new_todo("undated", None, None)).await.unwrap();
        insert_todo(pool, new_todo("late", None, Some("2025-12-01")))
            .await
            .unwrap();
        insert_todo(pool, new_todo("early", None, Some("2025-01-15")))
            .await
            .unwrap();

        let titles: Vec<_> = list_todos(pool, None)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["early", "late", "undated"]);
    }

    #[tokio::test]
    async fn test_list_keyword_is_case_sensitive_substring() {
        let (db, _dir) = test_db().await;
        let pool = db.get_pool();
        insert_todo(pool, new_todo("Buy milk", None, None)).await.unwrap();
        insert_todo(pool, new_todo("Call mom", Some("about the milk"), None))
            .await
            .unwrap();
        insert_todo(pool, new_todo("MILK", None, None)).await.unwrap();

        let matched: Vec<_> = list_todos(pool, Some("milk"))
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.contains(&"Buy milk".to_string()));
        assert!(matched.contains(&"Call mom".to_string()));

        assert!(list_todos(pool, Some("xyz")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (db, _dir) = test_db().await;
        let pool = db.get_pool();
        let mut todo = insert_todo(pool, new_todo("draft", None, None)).await.unwrap();

        todo.status = "Done".to_string();
        let updated = update_todo(pool, &todo).await.unwrap().unwrap();
        assert_eq!(updated.status, "Done");
        assert_eq!(updated.created_at, todo.created_at);

        assert!(delete_todo(pool, todo.id).await.unwrap());
        assert!(!delete_todo(pool, todo.id).await.unwrap());
        assert!(update_todo(pool, &todo).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let (db, _dir) = test_db().await;
        let pool = db.get_pool();
        let first = insert_todo(pool, new_todo("one", None, None)).await.unwrap();
        delete_todo(pool, first.id).await.unwrap();
        let second = insert_todo(pool, new_todo("two", None, None)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_counts() {
        let (db, _dir) = test_db().await;
        let pool = db.get_pool();
        assert_eq!(count_todos(pool).await.unwrap(), 0);

        for status in ["ToDo", "Done", "done", "Blocked"] {
            let mut todo = new_todo(status, None, None);
            todo.status = status.to_string();
            insert_todo(pool, todo).await.unwrap();
        }

        assert_eq!(count_todos(pool).await.unwrap(), 4);
        assert_eq!(count_todos_by_status(pool, "Done").await.unwrap(), 1);
        assert_eq!(count_todos_by_status(pool, "On-going").await.unwrap(), 0);
    }
}
