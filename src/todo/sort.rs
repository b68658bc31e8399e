use super::item::Todo;

/// Sort a view for display: pending before completed, then by due date
///
/// The sort is stable, so todos with the same state and date keep their
/// relative order.
pub fn sort_todos(todos: &mut [Todo]) {
    todos.sort_by(|a, b| a.state.cmp(&b.state).then(a.date.cmp(&b.date)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{TodoId, TodoState};
    use chrono::NaiveDate;

    fn todo(id: i64, day: u32, state: TodoState) -> Todo {
        let mut t = Todo::new(
            TodoId::new(id),
            format!("todo-{}", id),
            NaiveDate::from_ymd_opt(2023, 5, day).unwrap(),
        );
        t.state = state;
        t
    }

    fn ids(todos: &[Todo]) -> Vec<i64> {
        todos.iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn test_pending_first_then_date() {
        let mut todos = vec![
            todo(1, 3, TodoState::Completed),
            todo(2, 9, TodoState::Pending),
            todo(3, 1, TodoState::Completed),
            todo(4, 2, TodoState::Pending),
        ];
        sort_todos(&mut todos);
        assert_eq!(ids(&todos), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_relative_order() {
        let mut todos = vec![
            todo(30, 5, TodoState::Pending),
            todo(10, 5, TodoState::Pending),
            todo(20, 5, TodoState::Pending),
        ];
        sort_todos(&mut todos);
        assert_eq!(ids(&todos), vec![30, 10, 20]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut todos = vec![
            todo(1, 7, TodoState::Pending),
            todo(2, 7, TodoState::Completed),
            todo(3, 2, TodoState::Pending),
            todo(4, 7, TodoState::Pending),
            todo(5, 1, TodoState::Completed),
        ];
        sort_todos(&mut todos);
        let once = todos.clone();
        sort_todos(&mut todos);
        assert_eq!(todos, once);
    }

    #[test]
    fn test_sort_empty() {
        let mut todos: Vec<Todo> = Vec::new();
        sort_todos(&mut todos);
        assert!(todos.is_empty());
    }
}
