use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use taskboard_database::schema::{
    CreateTodoRequest, ListTodosParams, TodoResponse, UpdateTodoRequest,
};
use taskboard_services::{mutation_service, query_service};

use crate::{
    app_state::SharedAppState,
    error::{ErrorResponse, TaskboardServerResult},
};

pub fn routes(app_state: SharedAppState) -> Router<SharedAppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
        .with_state(app_state)
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(utoipa::OpenApi)]
#[openapi(
    paths(
        list_todos,
        create_todo,
        update_todo,
        delete_todo
    ),
    components(
        schemas(
            TodoResponse,
            CreateTodoRequest,
            UpdateTodoRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Todos", description = "Create, search, update and delete todos")
    )
)]
pub struct TodosOpenApi;

#[utoipa::path(
    tag = "Todos",
    get,
    path = "/todos",
    operation_id = "list_todos",
    params(ListTodosParams),
    responses(
        (status = 200, description = "Todos ordered by due date, undated last", body = [TodoResponse], content_type = "application/json")
    ),
)]
pub async fn list_todos(
    params: Result<Query<ListTodosParams>, QueryRejection>,
    State(state): State<SharedAppState>,
) -> TaskboardServerResult<impl IntoResponse> {
    let Query(params) = params?;
    let todos = query_service::list_todos(&state.db, params.q.as_deref()).await?;
    let todos: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();

    Ok(Json(todos))
}

#[utoipa::path(
    tag = "Todos",
    post,
    path = "/todos",
    operation_id = "create_todo",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Missing title or malformed due date", body = ErrorResponse),
    ),
)]
pub async fn create_todo(
    State(state): State<SharedAppState>,
    payload: Result<Json<Option<CreateTodoRequest>>, JsonRejection>,
) -> TaskboardServerResult<impl IntoResponse> {
    // A `null` body counts as an empty object.
    let request = payload?.0.unwrap_or_default();
    let todo = mutation_service::create_todo(&state.db, request).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

#[utoipa::path(
    tag = "Todos",
    put,
    path = "/todos/{id}",
    operation_id = "update_todo",
    params(
        ("id" = i64, Path, description = "Todo id")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 404, description = "Unknown todo id", body = ErrorResponse),
    ),
)]
pub async fn update_todo(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<SharedAppState>,
    payload: Result<Json<Option<UpdateTodoRequest>>, JsonRejection>,
) -> TaskboardServerResult<impl IntoResponse> {
    let Path(id) = id?;
    let request = payload?.0.unwrap_or_default();
    let todo = mutation_service::update_todo(&state.db, id, request).await?;

    Ok(Json(TodoResponse::from(todo)))
}

#[utoipa::path(
    tag = "Todos",
    delete,
    path = "/todos/{id}",
    operation_id = "delete_todo",
    params(
        ("id" = i64, Path, description = "Todo id")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 404, description = "Unknown todo id", body = ErrorResponse),
    ),
)]
pub async fn delete_todo(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<SharedAppState>,
) -> TaskboardServerResult<impl IntoResponse> {
    let Path(id) = id?;
    mutation_service::delete_todo(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "deleted".to_string(),
    }))
}
