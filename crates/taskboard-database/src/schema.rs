use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::todo::Todo;

// Distinguishes a missing key (outer `None`) from an explicit `null`
// (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// List
#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct ListTodosParams {
    /// Keyword matched against title and description (case-sensitive)
    pub q: Option<String>,
}

// Create
#[derive(Serialize, Deserialize, Debug, Default, Clone, ToSchema)]
pub struct CreateTodoRequest {
    /// Required, surrounding whitespace is trimmed
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to `ToDo`
    #[serde(default)]
    pub status: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub due_date: Option<String>,
}

// Update. Only keys present in the payload are applied.
#[derive(Serialize, Deserialize, Debug, Default, Clone, ToSchema)]
pub struct UpdateTodoRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub status: Option<Option<String>>,

    /// `YYYY-MM-DD`; `null` or `""` clears the due date
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub due_date: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description.unwrap_or_default(),
            status: todo.status,
            due_date: todo.due_date,
            created_at: todo.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct TodoStats {
    pub total: i64,
    pub done: i64,
    pub todo: i64,
    pub ongoing: i64,
}
