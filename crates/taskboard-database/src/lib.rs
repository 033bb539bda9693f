pub mod database;
pub mod error;
pub mod models;
pub mod repos;
pub mod schema;

pub use database::AppDatabase;

pub type DateWithTimeZone = chrono::DateTime<chrono::Utc>;

pub use models::*;
pub use repos::*;
