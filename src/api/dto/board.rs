use serde::{Deserialize, Serialize};

use crate::domain::{Board, Column, MoveOutcome, SeedStatus, Task};
use crate::services::BoardStore;

#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    pub key: &'static str,
    pub name: Column,
    pub title: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub incomplete: Vec<Task>,
    pub completed: Vec<Task>,
    pub in_review: Vec<Task>,
    pub backlog: Vec<Task>,
    pub columns: Vec<ColumnInfo>,
    pub seed_status: SeedStatus,
}

impl BoardResponse {
    pub fn from_store(store: &BoardStore) -> Self {
        Self::from_board(&store.board, store.seed_status.clone())
    }

    pub fn from_board(board: &Board, seed_status: SeedStatus) -> Self {
        let columns = Column::all()
            .iter()
            .map(|&column| ColumnInfo {
                key: column.key(),
                name: column,
                title: column.title(),
                count: board.column(column).len(),
            })
            .collect();
        let snapshot = board.snapshot();

        Self {
            incomplete: snapshot.incomplete,
            completed: snapshot.completed,
            in_review: snapshot.in_review,
            backlog: snapshot.backlog,
            columns,
            seed_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Move request addressed by column key (`"1".."4"`) or column name.
#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    pub source: String,
    #[serde(default)]
    pub destination: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub applied: bool,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub applied: bool,
    pub outcome: &'static str,
    pub task: Option<Task>,
    pub board: BoardResponse,
}

impl MoveResponse {
    pub fn new(outcome: MoveOutcome, board: BoardResponse) -> Self {
        let applied = outcome.is_applied();
        let label = outcome.as_str();
        let task = match outcome {
            MoveOutcome::Moved { task, .. } => Some(task),
            _ => None,
        };
        Self {
            applied,
            outcome: label,
            task,
            board,
        }
    }
}
