//! Operation handlers for the todo session
//!
//! This module contains the implementation of the user-facing operations.
//! Each handler is in a separate file.

pub mod create;
pub mod delete;
pub mod list;
pub mod toggle_state;
