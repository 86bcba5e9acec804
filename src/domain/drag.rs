//! Drag-and-drop events as produced by the board frontend.

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropLocation {
    pub droppable_id: String,
}

/// Completed drag gesture. `destination` is absent when the card was
/// dropped outside every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub source: DropLocation,
    #[serde(default)]
    pub destination: Option<DropLocation>,
    pub draggable_id: String,
}

/// A drag event narrowed to typed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMove {
    pub source: Column,
    pub destination: Option<Column>,
    pub task_id: TaskId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragRejection {
    #[error("unknown source column: {0}")]
    UnknownSource(String),

    #[error("invalid task id: {0}")]
    InvalidTaskId(String),
}

impl DragEvent {
    pub fn new(source: &str, destination: Option<&str>, draggable_id: &str) -> Self {
        Self {
            source: DropLocation {
                droppable_id: source.to_string(),
            },
            destination: destination.map(|d| DropLocation {
                droppable_id: d.to_string(),
            }),
            draggable_id: draggable_id.to_string(),
        }
    }

    /// Validates the raw event. An unrecognised destination key is treated
    /// the same as a drop outside every column.
    pub fn narrow(&self) -> Result<DragMove, DragRejection> {
        let source = Column::from_key(&self.source.droppable_id)
            .ok_or_else(|| DragRejection::UnknownSource(self.source.droppable_id.clone()))?;
        let task_id = self
            .draggable_id
            .trim()
            .parse::<TaskId>()
            .map_err(|_| DragRejection::InvalidTaskId(self.draggable_id.clone()))?;
        let destination = self
            .destination
            .as_ref()
            .and_then(|d| Column::from_key(&d.droppable_id));

        Ok(DragMove {
            source,
            destination,
            task_id,
        })
    }
}
