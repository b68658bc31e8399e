//! View filters for TodoList
//!
//! A view is derived from the full collection on every read. Nothing here
//! mutates the list.

use super::item::Todo;
use super::sort::sort_todos;
use super::todo_list::TodoList;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Category of todos shown in a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Filter {
    /// Every todo
    #[default]
    All,
    /// Pending todos due today
    Today,
    /// Pending todos whose due date has passed
    Overdue,
    /// Pending todos due after today
    Scheduled,
    /// Every pending todo
    Pending,
    /// Every completed todo
    Completed,
}

impl Filter {
    pub const VARIANTS: [Filter; 6] = [
        Filter::All,
        Filter::Today,
        Filter::Overdue,
        Filter::Scheduled,
        Filter::Pending,
        Filter::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Today => "today",
            Filter::Overdue => "overdue",
            Filter::Scheduled => "scheduled",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    /// Check whether `todo` belongs to this view
    ///
    /// Only pending todos can be due, so completed ones never match
    /// today/overdue/scheduled.
    pub fn matches(self, todo: &Todo, today: NaiveDate) -> bool {
        match self {
            Filter::All => true,
            Filter::Today => todo.is_pending() && todo.date == today,
            Filter::Overdue => todo.is_pending() && todo.date < today,
            Filter::Scheduled => todo.is_pending() && todo.date > today,
            Filter::Pending => todo.is_pending(),
            Filter::Completed => todo.is_completed(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Filter::VARIANTS
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid filter '{}'. Valid filters: all, today, overdue, scheduled, pending, completed",
                    s
                )
            })
    }
}

/// A filtered, sorted snapshot of the collection ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub filter: Filter,
    pub today: NaiveDate,
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Todos matching `filter`, in collection order
    pub fn filtered(&self, filter: Filter, today: NaiveDate) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|t| filter.matches(t, today))
            .cloned()
            .collect()
    }

    /// Todos matching `filter`, sorted for display
    pub fn view(&self, filter: Filter, today: NaiveDate) -> View {
        let mut todos = self.filtered(filter, today);
        sort_todos(&mut todos);
        View {
            filter,
            today,
            todos,
        }
    }

    /// Pending todos due today
    pub fn today(&self, today: NaiveDate) -> Vec<Todo> {
        self.filtered(Filter::Today, today)
    }

    /// Pending todos past their due date
    pub fn overdue(&self, today: NaiveDate) -> Vec<Todo> {
        self.filtered(Filter::Overdue, today)
    }

    /// Pending todos due after today
    pub fn scheduled(&self, today: NaiveDate) -> Vec<Todo> {
        self.filtered(Filter::Scheduled, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{TodoId, TodoState};

    #[test]
    fn test_command_line_names_match_display() {
        assert_eq!(Filter::value_variants(), &Filter::VARIANTS);
        for filter in Filter::VARIANTS {
            let value = filter.to_possible_value().unwrap();
            assert_eq!(value.get_name(), filter.as_str());
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_list(today: NaiveDate) -> TodoList {
        let mut list = TodoList::new();
        list.create("yesterday".to_string(), today.pred_opt().unwrap(), 1).unwrap();
        list.create("today".to_string(), today, 2).unwrap();
        list.create("tomorrow".to_string(), today.succ_opt().unwrap(), 3).unwrap();
        let done = list
            .create("done yesterday".to_string(), today.pred_opt().unwrap(), 4)
            .unwrap();
        list.toggle_state(done.id);
        list
    }

    fn texts(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("today".parse::<Filter>(), Ok(Filter::Today));
        assert_eq!("OVERDUE".parse::<Filter>(), Ok(Filter::Overdue));
        assert_eq!(" all ".parse::<Filter>(), Ok(Filter::All));
        assert!("someday".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_display_round_trips_names() {
        for filter in Filter::VARIANTS {
            assert_eq!(filter.to_string().parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn test_date_filters_only_include_pending() {
        let today = ymd(2023, 5, 5);
        let list = sample_list(today);

        assert_eq!(texts(&list.today(today)), vec!["today"]);
        assert_eq!(texts(&list.overdue(today)), vec!["yesterday"]);
        assert_eq!(texts(&list.scheduled(today)), vec!["tomorrow"]);
    }

    #[test]
    fn test_state_filters() {
        let today = ymd(2023, 5, 5);
        let list = sample_list(today);

        assert_eq!(list.filtered(Filter::Pending, today).len(), 3);
        assert_eq!(
            texts(&list.filtered(Filter::Completed, today)),
            vec!["done yesterday"]
        );
        assert_eq!(list.filtered(Filter::All, today).len(), 4);
    }

    #[test]
    fn test_view_is_sorted() {
        let today = ymd(2023, 5, 5);
        let list = sample_list(today);

        let view = list.view(Filter::All, today);
        assert_eq!(view.filter, Filter::All);
        assert_eq!(
            texts(&view.todos),
            vec!["yesterday", "today", "tomorrow", "done yesterday"]
        );
    }

    #[test]
    fn test_completed_todo_matches_no_date_filter() {
        let today = ymd(2023, 5, 5);
        let mut todo = Todo::new(TodoId::new(1), "A", today);
        todo.state = TodoState::Completed;

        for date in [today.pred_opt().unwrap(), today, today.succ_opt().unwrap()] {
            todo.date = date;
            assert!(!Filter::Today.matches(&todo, today));
            assert!(!Filter::Overdue.matches(&todo, today));
            assert!(!Filter::Scheduled.matches(&todo, today));
        }
    }
}
