use crate::app_state::SharedAppState;
use axum::{response::IntoResponse, routing::get, Json, Router};
use utoipa::OpenApi;

use super::api::{healthcheck::HealthCheckOpenApi, stats::StatsOpenApi, todos::TodosOpenApi};

#[derive(OpenApi)]
#[openapi(info(
    title = "Taskboard API",
    version = "0.1.0",
    description = "Create, search and track todos"
))]
pub struct OpenApiDoc;

pub fn routes(app_state: SharedAppState) -> Router<SharedAppState> {
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .with_state(app_state)
}

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = OpenApiDoc::openapi();
    doc.merge(TodosOpenApi::openapi());
    doc.merge(StatsOpenApi::openapi());
    doc.merge(HealthCheckOpenApi::openapi());
    doc
}

async fn openapi_json() -> impl IntoResponse {
    Json(openapi())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::routes::test_support::{send, test_app};

    #[test]
    fn test_document_lists_every_route() {
        let doc = openapi();
        for path in ["/todos", "/todos/{id}", "/stats", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn test_serves_openapi_json() {
        let (app, _dir) = test_app().await;
        let (status, body) = send(&app, "GET", "/docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Taskboard API");
    }
}
