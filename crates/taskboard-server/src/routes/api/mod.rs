pub mod healthcheck;
pub mod stats;
pub mod todos;

use std::sync::Arc;

use axum::Router;
use healthcheck::routes as healthcheck_routes;
use stats::routes as stats_routes;
use todos::routes as todos_routes;

use crate::app_state::SharedAppState;

pub fn routes(app_state: SharedAppState) -> Router<SharedAppState> {
    Router::new()
        .merge(healthcheck_routes(Arc::clone(&app_state)))
        .merge(todos_routes(Arc::clone(&app_state)))
        .merge(stats_routes(Arc::clone(&app_state)))
}
