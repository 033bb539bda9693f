use taskboard_database::{
    schema::TodoStats,
    todo::{Todo, TodoStatus},
    todo_repo, AppDatabase,
};

use crate::error::TaskboardServicesResult;

/// All todos, or those matching `keyword`. Surrounding whitespace is ignored
/// and an empty keyword matches everything.
pub async fn list_todos(
    db: &AppDatabase,
    keyword: Option<&str>,
) -> TaskboardServicesResult<Vec<Todo>> {
    let keyword = keyword.map(str::trim).filter(|keyword| !keyword.is_empty());
    let todos = todo_repo::list_todos(db.get_pool(), keyword).await?;

    Ok(todos)
}

pub async fn todo_stats(db: &AppDatabase) -> TaskboardServicesResult<TodoStats> {
    let pool = db.get_pool();

    Ok(TodoStats {
        total: todo_repo::count_todos(pool).await?,
        done: todo_repo::count_todos_by_status(pool, TodoStatus::Done.as_str()).await?,
        todo: todo_repo::count_todos_by_status(pool, TodoStatus::ToDo.as_str()).await?,
        ongoing: todo_repo::count_todos_by_status(pool, TodoStatus::OnGoing.as_str()).await?,
    })
}
