//! Todo domain models and business logic
//!
//! This module contains the core todo data structures and their implementations.
//! It is split into submodules:
//! - `item`: Single todo record, its state and ID
//! - `todo_list`: Collection container with all mutating operations
//! - `queries`: View filters (today, overdue, scheduled, by state)
//! - `sort`: Display ordering of a view
//! - `serde_impl`: Serialization/deserialization of the collection

mod item;
mod queries;
mod serde_impl;
mod sort;
mod todo_list;

// Re-export all public types
pub use item::{Todo, TodoId, TodoState};
pub use queries::{Filter, View};
pub use serde_impl::SLOT_KEY;
pub use sort::sort_todos;
pub use todo_list::TodoList;
