pub mod mutation_service;
pub mod query_service;

#[cfg(test)]
pub(crate) async fn test_db() -> (taskboard_database::AppDatabase, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let args = taskboard_common::settings::DatabaseArgs {
        path: dir.path().join("todo.db"),
        ..Default::default()
    };
    let db = taskboard_database::database::get_app_database(&args)
        .await
        .unwrap();
    (db, dir)
}
