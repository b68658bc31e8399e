//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use todo_list::{TodoHandler, TodoId, TodoState, Todo};

/// Fixed reference date used by the scenario tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 5).unwrap()
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().unwrap()
}

pub fn tomorrow() -> NaiveDate {
    today().succ_opt().unwrap()
}

/// Create a test handler with temporary storage
///
/// The directory must outlive the handler, so it is returned alongside.
pub fn get_test_handler() -> (TodoHandler, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler = TodoHandler::new(temp_dir.path().join("todos.toml"));
    (handler, temp_dir)
}

/// Create a test todo with minimal fields
pub fn create_test_todo(id: i64, text: &str, date: NaiveDate, state: TodoState) -> Todo {
    let mut todo = Todo::new(TodoId::new(id), text, date);
    todo.state = state;
    todo
}

pub fn texts(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.text.as_str()).collect()
}
