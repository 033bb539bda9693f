use std::sync::Arc;

use app_state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use taskboard_common::{
    info,
    settings::{DatabaseArgs, ServerArgs},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::TaskboardServerResult;

pub mod app_state;
pub mod error;
pub mod routes;
pub(crate) mod utils;

pub use app_state::SharedAppState;

#[derive(Debug)]
pub struct Server {
    args: ServerArgs,
    database: DatabaseArgs,
}

/// The complete application: routes plus request tracing and CORS.
pub fn app(app_state: SharedAppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE]);

    routes::routes(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

impl Server {
    pub fn new(args: ServerArgs, database: DatabaseArgs) -> Self {
        Self { args, database }
    }

    pub async fn run(&self) -> TaskboardServerResult<()> {
        // The schema is in place before the listener accepts anything.
        let app_state = AppState::new(&self.database).await?;
        let db = app_state.db.clone();
        let app = app(Arc::new(app_state));

        let listener = TcpListener::bind(self.args.bind_address()).await?;
        info!(
            "Server started successfully at http://{}",
            listener.local_addr()?
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        db.close().await;
        info!("Server stopped");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        taskboard_common::error!("Unable to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::routes::test_support::send;

    #[tokio::test]
    async fn test_app_serves_api_with_layers() {
        let dir = tempfile::tempdir().unwrap();
        let args = DatabaseArgs {
            path: dir.path().join("todo.db"),
            ..DatabaseArgs::default()
        };
        let app = app(Arc::new(AppState::new(&args).await.unwrap()));

        let (status, _) = send(&app, "POST", "/todos", Some(json!({ "title": "Buy milk" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, stats) = send(&app, "GET", "/stats", None).await;
        assert_eq!(stats["total"], 1);
    }
}
