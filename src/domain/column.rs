use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four fixed buckets on the board.
///
/// The numeric keys `"1".."4"` are shared with the rendering layer, which
/// assigns them to the rendered columns as droppable ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Incomplete,
    Completed,
    InReview,
    Backlog,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Incomplete => "incomplete",
            Column::Completed => "completed",
            Column::InReview => "in_review",
            Column::Backlog => "backlog",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Column::Incomplete => "1",
            Column::Completed => "2",
            Column::InReview => "3",
            Column::Backlog => "4",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Column::Incomplete => "TO DO",
            Column::Completed => "DONE",
            Column::InReview => "IN REVIEW",
            Column::Backlog => "BACKLOG",
        }
    }

    /// Render order, which is also the lookup order for tasks.
    pub fn all() -> &'static [Column] {
        &[
            Column::Incomplete,
            Column::Completed,
            Column::InReview,
            Column::Backlog,
        ]
    }

    pub fn from_key(key: &str) -> Option<Column> {
        match key.trim() {
            "1" => Some(Column::Incomplete),
            "2" => Some(Column::Completed),
            "3" => Some(Column::InReview),
            "4" => Some(Column::Backlog),
            _ => None,
        }
    }

    /// Whether a task landing in this column counts as done.
    pub fn marks_completed(&self) -> bool {
        matches!(self, Column::Completed)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(column) = Column::from_key(s) {
            return Ok(column);
        }
        match s {
            "incomplete" => Ok(Column::Incomplete),
            "completed" => Ok(Column::Completed),
            "in_review" => Ok(Column::InReview),
            "backlog" => Ok(Column::Backlog),
            _ => Err(format!("Invalid column: {}", s)),
        }
    }
}
