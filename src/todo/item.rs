use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Completion state of a todo
///
/// The derived ordering puts `Pending` before `Completed`, which is the
/// primary sort key of every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoState {
    /// Still to be done
    Pending,
    /// Done
    Completed,
}

impl TodoState {
    /// The state a toggle moves to
    pub fn toggled(self) -> Self {
        match self {
            TodoState::Pending => TodoState::Completed,
            TodoState::Completed => TodoState::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TodoState::Pending => "pending",
            TodoState::Completed => "completed",
        }
    }
}

impl fmt::Display for TodoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(TodoState::Pending),
            "completed" => Ok(TodoState::Completed),
            _ => Err(format!(
                "Invalid state '{}'. Valid options are: pending, completed",
                s
            )),
        }
    }
}

/// Identifier of a todo, derived from its creation time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(TodoId)
            .map_err(|_| format!("Invalid todo ID '{}'. IDs are whole numbers", s))
    }
}

/// A single todo record
///
/// Field order matches the persisted layout: text, date, state, id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// User supplied label, never empty
    pub text: String,
    /// Due date (format: YYYY-MM-DD when persisted)
    #[serde(with = "crate::date::serde_date")]
    pub date: NaiveDate,
    /// Current completion state
    pub state: TodoState,
    /// Unique, immutable identifier
    pub id: TodoId,
}

impl Todo {
    /// Create a new pending todo
    pub fn new(id: TodoId, text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            date,
            state: TodoState::Pending,
            id,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TodoState::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.state == TodoState::Completed
    }

    /// A pending todo whose due date is before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.date < today
    }
}
