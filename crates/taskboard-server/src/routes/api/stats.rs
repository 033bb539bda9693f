use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use taskboard_database::schema::TodoStats;
use taskboard_services::query_service;

use crate::{app_state::SharedAppState, error::TaskboardServerResult};

pub fn routes(app_state: SharedAppState) -> Router<SharedAppState> {
    Router::new()
        .route("/stats", get(todo_stats))
        .with_state(app_state)
}

#[derive(utoipa::OpenApi)]
#[openapi(
    paths(todo_stats),
    components(schemas(TodoStats)),
    tags(
        (name = "Stats", description = "Counts of todos per status")
    )
)]
pub struct StatsOpenApi;

#[utoipa::path(
    tag = "Stats",
    get,
    path = "/stats",
    operation_id = "todo_stats",
    responses(
        (status = 200, description = "Total and per-status counts", body = TodoStats)
    ),
)]
pub async fn todo_stats(
    State(state): State<SharedAppState>,
) -> TaskboardServerResult<impl IntoResponse> {
    let stats = query_service::todo_stats(&state.db).await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{send, test_app};

    #[tokio::test]
    async fn test_stats_empty_then_counts() {
        let (app, _dir) = test_app().await;

        let (status, body) = send(&app, "GET", "/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "total": 0, "done": 0, "todo": 0, "ongoing": 0 }));

        for status in ["ToDo", "Done", "On-going"] {
            let (code, _) = send(
                &app,
                "POST",
                "/todos",
                Some(json!({ "title": format!("{status} item"), "status": status })),
            )
            .await;
            assert_eq!(code, StatusCode::CREATED);
        }

        let (_, body) = send(&app, "GET", "/stats", None).await;
        assert_eq!(body, json!({ "total": 3, "done": 1, "todo": 1, "ongoing": 1 }));
    }
}
