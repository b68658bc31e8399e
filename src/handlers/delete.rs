//! Delete handler

use crate::TodoHandler;
use crate::todo::{Todo, TodoId};
use anyhow::Result;
use tracing::debug;

impl TodoHandler {
    /// Remove a todo and save
    ///
    /// The active view is derived from the collection, so the todo also
    /// disappears from it.
    ///
    /// # Returns
    /// The removed todo, or `None` when no todo has this ID (nothing is saved)
    pub fn handle_delete(&mut self, id: TodoId) -> Result<Option<Todo>> {
        if !self.list.contains(id) {
            debug!(%id, "delete ignored: unknown id");
            return Ok(None);
        }

        let previous = self.list.clone();
        let removed = self.list.remove(id);
        if removed.is_some() {
            self.commit(previous, &format!("Delete todo {}", id))?;
        }
        Ok(removed)
    }
}
