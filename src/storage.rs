use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::todo::TodoList;

/// File-backed store for the todo collection
///
/// The whole collection lives in one TOML file and every save replaces the
/// file's previous contents.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load the collection, treating a missing or unreadable file as empty
    pub fn load(&self) -> TodoList {
        match self.try_load() {
            Ok(list) => list,
            Err(e) => {
                let error = format!("{:#}", e);
                warn!(
                    path = %self.file_path.display(),
                    error = %error,
                    "ignoring unreadable todo file, starting with an empty list"
                );
                TodoList::new()
            }
        }
    }

    /// Load the collection, reporting malformed content as an error
    ///
    /// A missing file is still an empty list.
    pub fn try_load(&self) -> Result<TodoList> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no todo file yet");
            return Ok(TodoList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let list: TodoList = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = list.len(), "loaded todos");
        Ok(list)
    }

    pub fn save(&self, list: &TodoList) -> Result<()> {
        let content = toml::to_string_pretty(list).context("Failed to serialize todos")?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = list.len(), "saved todos");
        Ok(())
    }
}
