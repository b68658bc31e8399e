//! Serialization and deserialization implementations for TodoList
//!
//! The list is persisted as a single named slot, `todo_list`, holding an array
//! of todo records. The ID index is not stored; it is rebuilt on load.

use super::item::Todo;
use super::todo_list::TodoList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the slot the collection is stored under
pub const SLOT_KEY: &str = "todo_list";

#[derive(Deserialize)]
struct TodoListHelper {
    #[serde(default)]
    todo_list: Vec<Todo>,
}

impl<'de> Deserialize<'de> for TodoList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = TodoListHelper::deserialize(deserializer)?;
        Ok(TodoList::from_todos(helper.todo_list))
    }
}

impl Serialize for TodoList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TodoList", 1)?;
        state.serialize_field(SLOT_KEY, &self.todos)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{TodoId, TodoState};
    use chrono::NaiveDate;

    #[test]
    fn test_serialized_layout() {
        let mut list = TodoList::new();
        list.create(
            "Buy milk".to_string(),
            NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(),
            1_683_279_123_456,
        )
        .unwrap();

        let toml_str = toml::to_string_pretty(&list).unwrap();
        assert!(toml_str.contains("[[todo_list]]"));
        assert!(toml_str.contains("text = \"Buy milk\""));
        assert!(toml_str.contains("date = \"2023-05-05\""));
        assert!(toml_str.contains("state = \"pending\""));
        assert!(toml_str.contains("id = 1683279123456"));
    }

    #[test]
    fn test_deserialize_accepts_date_times() {
        let toml_str = r#"
[[todo_list]]
text = "Stored by the browser"
date = "2023-05-05T00:00:00.000Z"
state = "completed"
id = 7
"#;
        let list: TodoList = toml::from_str(toml_str).unwrap();
        let todo = list.find(TodoId::new(7)).unwrap();
        assert_eq!(todo.date, NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
        assert_eq!(todo.state, TodoState::Completed);
    }

    #[test]
    fn test_deserialize_empty_document() {
        let list: TodoList = toml::from_str("").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_bad_state() {
        let toml_str = r#"
[[todo_list]]
text = "A"
date = "2023-05-05"
state = "archived"
id = 1
"#;
        assert!(toml::from_str::<TodoList>(toml_str).is_err());
    }
}
