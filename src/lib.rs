//! Todo List Library
//!
//! A small todo list: each todo has a text, a due date and a pending or
//! completed state. The collection is persisted to a TOML file after every
//! change and shown through date-based views (today, overdue, scheduled) or
//! state-based views (pending, completed).
//!
//! # Architecture
//!
//! - **Session Layer**: `TodoHandler` - Owns the collection, the store and the
//!   active filter; every mutation is persisted before it returns
//! - **Domain Layer**: `todo` module - Todo records, filters and sorting
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//! - **Presentation**: `formatting` and `shell` - Text rendering and the
//!   interactive command loop
//!
//! # Example
//!
//! ```no_run
//! use todo_list::{Filter, TodoHandler, date};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut handler = TodoHandler::new("todos.toml");
//!     handler.handle_create("Buy milk", "2025-03-15")?;
//!     print!("{}", handler.handle_list(Some(Filter::Pending), date::local_date_today()));
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod shell;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info};

// Re-export commonly used types
pub use storage::Storage;
pub use todo::{sort_todos, Filter, Todo, TodoId, TodoList, TodoState, View};

/// Session over a persisted todo collection
///
/// Holds the loaded collection, the store it came from and the filter the user
/// is currently looking at. Views are recomputed from the collection on every
/// call, so a mutation is visible in the next view without extra bookkeeping.
pub struct TodoHandler {
    pub(crate) list: TodoList,
    pub(crate) storage: Storage,
    pub(crate) active_filter: Filter,
}

impl TodoHandler {
    /// Create a new handler, loading whatever the store holds
    ///
    /// A missing or malformed file gives an empty collection.
    ///
    /// # Arguments
    /// * `storage_path` - Path to the todo data file (TOML format)
    pub fn new(storage_path: impl AsRef<Path>) -> Self {
        let storage = Storage::new(storage_path);
        let list = storage.load();
        debug!(count = list.len(), "todo session started");
        Self {
            list,
            storage,
            active_filter: Filter::default(),
        }
    }

    /// The full collection, in stored order
    pub fn todos(&self) -> &[Todo] {
        self.list.as_slice()
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    pub fn set_active_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
    }

    /// Sorted view for the active filter
    pub fn current_view(&self, today: NaiveDate) -> View {
        self.list.view(self.active_filter, today)
    }

    /// Persist the collection after a mutation
    ///
    /// If the save fails the collection is put back to `previous`, so the
    /// in-memory state never runs ahead of the file.
    fn commit(&mut self, previous: TodoList, message: &str) -> Result<()> {
        if let Err(e) = self.storage.save(&self.list) {
            self.list = previous;
            return Err(e.context(format!("Failed to save: {}", message)));
        }
        info!(count = self.list.len(), "{}", message);
        Ok(())
    }
}
