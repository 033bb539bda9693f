use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;

use crate::DateWithTimeZone;

/// A row of the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    // Free-form in storage; see `TodoStatus` for the values the stats count.
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateWithTimeZone,
}

/// A validated record ready to be inserted. `id` and `created_at` are assigned
/// on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<NaiveDate>,
}

/// The statuses the stats count. New todos default to `ToDo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoStatus {
    #[default]
    ToDo,
    OnGoing,
    Done,
}

impl TodoStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::ToDo => "ToDo",
            TodoStatus::OnGoing => "On-going",
            TodoStatus::Done => "Done",
        }
    }
}

impl Display for TodoStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names_match_stored_values() {
        let names: Vec<_> = [TodoStatus::ToDo, TodoStatus::OnGoing, TodoStatus::Done]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["ToDo", "On-going", "Done"]);
        assert_eq!(TodoStatus::default().as_str(), "ToDo");
    }
}
