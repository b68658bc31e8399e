use crate::todo::item::{Todo, TodoId, TodoState};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    /// All todos in insertion order
    ///
    /// Order carries no meaning for views (they are always re-sorted), but a
    /// Vec keeps the persisted file stable between saves.
    pub(crate) todos: Vec<Todo>,

    /// Index of the IDs in `todos` for O(1) duplicate checks
    ///
    /// Kept in sync by every mutating method and rebuilt on load. Not
    /// serialized.
    pub(crate) ids: HashSet<TodoId>,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TodoList {
    /// Create a new empty TodoList instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from loaded records
    ///
    /// Records with blank text are dropped. The first record with a given
    /// ID wins and later duplicates are dropped. Both are logged.
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        let mut list = Self::new();
        for todo in todos {
            if todo.text.trim().is_empty() {
                warn!(id = %todo.id, "dropping todo with empty text");
                continue;
            }
            if list.ids.contains(&todo.id) {
                warn!(id = %todo.id, text = %todo.text, "dropping todo with duplicate id");
                continue;
            }
            list.ids.insert(todo.id);
            list.todos.push(todo);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.ids.contains(&id)
    }

    /// Find a todo by its ID
    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// Generate an ID for a todo created at `now_millis`
    ///
    /// Normally the timestamp itself. If that is not above every existing ID
    /// (two creations in the same millisecond, clock moved back) the next
    /// integer after the current maximum is used instead.
    ///
    /// # Returns
    /// `None` once the largest ID is `i64::MAX` and no larger one exists
    pub fn next_id(&self, now_millis: i64) -> Option<TodoId> {
        let floor = match self.ids.iter().max() {
            Some(max) => max.get().checked_add(1)?,
            None => i64::MIN,
        };
        Some(TodoId::new(now_millis.max(floor)))
    }

    /// Append a new pending todo
    ///
    /// The caller is responsible for validating `text`.
    ///
    /// # Returns
    /// A copy of the created todo, or `None` (list unchanged) when no fresh
    /// ID is left
    pub fn create(&mut self, text: String, date: NaiveDate, now_millis: i64) -> Option<Todo> {
        let id = self.next_id(now_millis)?;
        let todo = Todo::new(id, text, date);
        self.ids.insert(id);
        self.todos.push(todo.clone());
        Some(todo)
    }

    /// Flip a todo between pending and completed
    ///
    /// # Returns
    /// The new state, or `None` if no todo has this ID
    pub fn toggle_state(&mut self, id: TodoId) -> Option<TodoState> {
        let todo = self.find_mut(id)?;
        todo.state = todo.state.toggled();
        Some(todo.state)
    }

    /// Remove a todo from the collection and return it
    pub fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == id)?;
        self.ids.remove(&id);
        Some(self.todos.remove(pos))
    }
}
