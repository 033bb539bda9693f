use std::sync::Arc;

use taskboard_common::settings::DatabaseArgs;
use taskboard_database::{database::get_app_database, AppDatabase};

use crate::error::TaskboardServerResult;

pub type SharedAppState = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: AppDatabase,
}

impl AppState {
    /// Opens the store and provisions its schema before any request is served.
    pub async fn new(args: &DatabaseArgs) -> TaskboardServerResult<Self> {
        let db = get_app_database(args).await?;

        Ok(Self { db })
    }
}
