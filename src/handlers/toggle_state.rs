//! Toggle state handler

use crate::TodoHandler;
use crate::todo::{TodoId, TodoState};
use anyhow::Result;
use tracing::debug;

impl TodoHandler {
    /// Flip a todo between pending and completed and save
    ///
    /// # Returns
    /// The new state, or `None` when no todo has this ID (nothing is saved)
    pub fn handle_toggle_state(&mut self, id: TodoId) -> Result<Option<TodoState>> {
        if !self.list.contains(id) {
            debug!(%id, "toggle ignored: unknown id");
            return Ok(None);
        }

        let previous = self.list.clone();
        let state = self.list.toggle_state(id);
        if let Some(new_state) = state {
            self.commit(previous, &format!("Mark todo {} {}", id, new_state))?;
        }
        Ok(state)
    }
}
