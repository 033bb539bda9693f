use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use taskboard_common::settings::DatabaseArgs;

use crate::error::{TaskboardDatabaseError, TaskboardDatabaseResult};

const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(200) NOT NULL,
    description TEXT,
    status VARCHAR(50) NOT NULL DEFAULT 'ToDo',
    due_date DATE,
    created_at DATETIME NOT NULL
)"#;

const CREATE_DUE_DATE_INDEX: &str =
    r#"CREATE INDEX IF NOT EXISTS idx_todos_due_date ON todos (due_date)"#;

/// Opens (creating if needed) the SQLite file described by `args` and
/// provisions the schema before handing the pool out.
pub async fn get_app_database(args: &DatabaseArgs) -> TaskboardDatabaseResult<AppDatabase> {
    let path = args.path.as_path();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                TaskboardDatabaseError::DatabaseFile(path.display().to_string(), e)
            })?;
        }
    }

    tracing::info!("Connecting to database: {}", path.display());
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let db = SqlitePoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(Duration::from_secs(args.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    AppDatabase::new(db).await
}

#[derive(Debug, Clone)]
pub struct AppDatabase {
    pub db: SqlitePool,
}

impl AppDatabase {
    pub async fn new(db: SqlitePool) -> TaskboardDatabaseResult<Self> {
        let db = Self { db };
        db.initialize_schema().await?;
        Ok(db)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.db
    }

    /// Safe to run on every start; existing tables and rows are left alone.
    pub async fn initialize_schema(&self) -> TaskboardDatabaseResult<()> {
        sqlx::query(CREATE_TODOS_TABLE).execute(&self.db).await?;
        sqlx::query(CREATE_DUE_DATE_INDEX).execute(&self.db).await?;
        tracing::debug!("Database schema initialized");

        Ok(())
    }

    pub async fn ping(&self) -> TaskboardDatabaseResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.db.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(path: std::path::PathBuf) -> DatabaseArgs {
        DatabaseArgs {
            path,
            ..DatabaseArgs::default()
        }
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("todo.db");

        let db = get_app_database(&args_for(path.clone())).await.unwrap();
        assert!(path.exists());
        db.close().await;
    }

    #[tokio::test]
    async fn test_initialize_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.db");

        let db = get_app_database(&args_for(path.clone())).await.unwrap();
        sqlx::query("INSERT INTO todos (title, status, created_at) VALUES ('keep me', 'ToDo', '2025-01-01T00:00:00Z')")
            .execute(db.get_pool())
            .await
            .unwrap();
        db.initialize_schema().await.unwrap();
        db.close().await;

        // Reopening runs the schema step again against the existing file.
        let db = get_app_database(&args_for(path)).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(db.get_pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
