//! Create handler

use crate::TodoHandler;
use crate::todo::Todo;
use crate::validation;
use anyhow::{Result, bail};
use chrono::Utc;
use tracing::debug;

impl TodoHandler {
    /// Add a todo due on `date`, stamped with the current time
    ///
    /// See [`TodoHandler::create_at`].
    pub fn handle_create(&mut self, text: &str, date: &str) -> Result<Option<Todo>> {
        self.create_at(text, date, Utc::now().timestamp_millis())
    }

    /// Add a todo as if created at `now_millis`
    ///
    /// # Returns
    /// * `Ok(Some(todo))` - the todo was added and saved
    /// * `Ok(None)` - text or date was empty; nothing changed
    /// * `Err(_)` - the date could not be parsed, no unused ID is left, or
    ///   saving failed (nothing changed in any of these cases)
    pub fn create_at(&mut self, text: &str, date: &str, now_millis: i64) -> Result<Option<Todo>> {
        let Some(text) = validation::normalize_text(text) else {
            debug!("create rejected: empty text");
            return Ok(None);
        };
        let Some(due) = validation::parse_due_date(date)? else {
            debug!("create rejected: empty date");
            return Ok(None);
        };

        let previous = self.list.clone();
        let Some(todo) = self.list.create(text, due, now_millis) else {
            bail!("No todo ID left above the largest stored ID");
        };
        self.commit(previous, &format!("Add todo {}", todo.id))?;
        Ok(Some(todo))
    }
}

#[cfg(test)]
mod tests {
    use crate::TodoHandler;
    use crate::todo::TodoState;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn handler_in(dir: &TempDir) -> TodoHandler {
        TodoHandler::new(dir.path().join("todos.toml"))
    }

    #[test]
    fn test_create_adds_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut handler = handler_in(&dir);

        let todo = handler
            .create_at("Buy milk", "2023-05-05", 100)
            .unwrap()
            .unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert_eq!(todo.date, NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
        assert_eq!(todo.state, TodoState::Pending);

        let reloaded = handler_in(&dir);
        assert_eq!(reloaded.todos(), &[todo]);
    }

    #[test]
    fn test_create_rejects_empty_fields_silently() {
        let dir = TempDir::new().unwrap();
        let mut handler = handler_in(&dir);

        assert!(handler.create_at("", "2023-05-05", 1).unwrap().is_none());
        assert!(handler.create_at("   ", "2023-05-05", 1).unwrap().is_none());
        assert!(handler.create_at("Buy milk", "", 1).unwrap().is_none());
        assert!(handler.todos().is_empty());
        assert!(!dir.path().join("todos.toml").exists());
    }

    #[test]
    fn test_create_with_bad_date_is_error_without_change() {
        let dir = TempDir::new().unwrap();
        let mut handler = handler_in(&dir);

        assert!(handler.create_at("Buy milk", "soon", 1).is_err());
        assert!(handler.todos().is_empty());
    }

    #[test]
    fn test_create_save_failure_leaves_list_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut handler = TodoHandler::new(dir.path().join("missing").join("todos.toml"));

        assert!(handler.create_at("Buy milk", "2023-05-05", 1).is_err());
        assert!(handler.todos().is_empty());
    }
}
