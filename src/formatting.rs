//! Formatting helper functions for todo views
//!
//! This module turns a sorted view into the text shown to the user.

use crate::date;
use crate::todo::{Filter, Todo, TodoState, View};
use chrono::NaiveDate;

/// Message shown when a view has no todos
///
/// # Arguments
/// * `filter` - The active filter
pub fn empty_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No todos added!".to_string(),
        other => format!("No {} todos!", other),
    }
}

/// Separator shown in place of line breaks inside a todo's text
pub const LINE_BREAK_MARK: &str = " / ";

/// Format a single todo as one line
///
/// Line breaks in the text are shown as [`LINE_BREAK_MARK`]; the stored text
/// keeps them.
///
/// # Arguments
/// * `todo` - The todo to format
/// * `today` - Reference date for the overdue marker
pub fn format_todo(todo: &Todo, today: NaiveDate) -> String {
    let checkbox = match todo.state {
        TodoState::Pending => "[ ]",
        TodoState::Completed => "[x]",
    };
    let overdue = if todo.is_overdue(today) {
        ", overdue"
    } else {
        ""
    };
    format!(
        "- {} {} {} ({}{})",
        checkbox,
        todo.id,
        single_line(&todo.text),
        date::format_display(todo.date),
        overdue
    )
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(LINE_BREAK_MARK)
}

/// Format a view into a display string
///
/// # Arguments
/// * `view` - Filtered and sorted todos with the filter that produced them
///
/// # Returns
/// Formatted string representation of the view
pub fn render_view(view: &View) -> String {
    if view.todos.is_empty() {
        return empty_message(view.filter);
    }

    let mut result = format!("Found {} todo(s) [{}]:\n\n", view.todos.len(), view.filter);
    for todo in &view.todos {
        result.push_str(&format_todo(todo, view.today));
        result.push('\n');
    }
    result
}
