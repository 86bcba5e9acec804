use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::api::handlers::sse::BoardEvent;
use crate::domain::{Board, Column, DragEvent, MoveOutcome, SeedStatus, TaskId};

use super::seed_client::SeedClient;

/// The board together with the status of its last seed load.
#[derive(Debug, Default)]
pub struct BoardStore {
    pub board: Board,
    pub seed_status: SeedStatus,
}

pub type SharedBoard = Arc<RwLock<BoardStore>>;

pub fn shared_board() -> SharedBoard {
    Arc::new(RwLock::new(BoardStore::default()))
}

pub struct BoardService;

impl BoardService {
    /// Fetches the seed list and applies it. A failed fetch is recorded in the
    /// store and leaves the board untouched.
    pub async fn load_seed(
        store: &SharedBoard,
        events_tx: &broadcast::Sender<String>,
        client: &SeedClient,
    ) -> SeedStatus {
        let fetched = client.fetch().await;

        let mut guard = store.write().await;
        let status = match fetched {
            Ok(tasks) => {
                guard.board.load_seed(tasks);
                let incomplete = guard.board.column(Column::Incomplete).len();
                let completed = guard.board.column(Column::Completed).len();
                tracing::info!(incomplete, completed, url = client.url(), "Seed loaded");
                BoardEvent::BoardLoaded {
                    incomplete,
                    completed,
                }
                .publish(events_tx);
                SeedStatus::loaded(incomplete + completed)
            }
            Err(e) => {
                tracing::warn!(url = client.url(), "Failed to load seed tasks: {}", e);
                BoardEvent::SeedFailed {
                    error: e.to_string(),
                }
                .publish(events_tx);
                SeedStatus::failed(e.to_string())
            }
        };
        guard.seed_status = status.clone();
        status
    }

    pub async fn delete_task(
        store: &SharedBoard,
        events_tx: &broadcast::Sender<String>,
        id: TaskId,
    ) -> bool {
        let deleted = store.write().await.board.delete_task(id);
        if deleted {
            tracing::debug!(task_id = id, "Task deleted");
            BoardEvent::TaskDeleted { task_id: id }.publish(events_tx);
        }
        deleted
    }

    pub async fn edit_task(
        store: &SharedBoard,
        events_tx: &broadcast::Sender<String>,
        id: TaskId,
        title: &str,
    ) -> bool {
        let edited = store.write().await.board.edit_task(id, title);
        if edited {
            tracing::debug!(task_id = id, "Task retitled");
            BoardEvent::TaskUpdated {
                task_id: id,
                title: title.to_string(),
            }
            .publish(events_tx);
        }
        edited
    }

    pub async fn move_task(
        store: &SharedBoard,
        events_tx: &broadcast::Sender<String>,
        source: Column,
        destination: Option<Column>,
        id: TaskId,
    ) -> MoveOutcome {
        let outcome = store.write().await.board.move_task(source, destination, id);
        Self::publish_move(events_tx, &outcome);
        outcome
    }

    pub async fn apply_drag(
        store: &SharedBoard,
        events_tx: &broadcast::Sender<String>,
        event: &DragEvent,
    ) -> MoveOutcome {
        let outcome = store.write().await.board.apply_drag(event);
        Self::publish_move(events_tx, &outcome);
        outcome
    }

    fn publish_move(events_tx: &broadcast::Sender<String>, outcome: &MoveOutcome) {
        if let MoveOutcome::Moved { task, from, to } = outcome {
            tracing::debug!(task_id = task.id, %from, %to, "Task moved");
            BoardEvent::TaskMoved {
                task_id: task.id,
                from: *from,
                to: *to,
            }
            .publish(events_tx);
        }
    }
}
