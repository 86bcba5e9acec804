use serde::{Deserialize, Serialize};

pub type TaskId = i64;

/// A single card on the board.
///
/// The shape matches the remote todo list: unknown fields such as `userId`
/// are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }
}
