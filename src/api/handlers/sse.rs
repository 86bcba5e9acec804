use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;

use crate::api::AppState;
use crate::domain::{Column, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BoardEvent {
    BoardLoaded { incomplete: usize, completed: usize },
    SeedFailed { error: String },
    TaskMoved { task_id: TaskId, from: Column, to: Column },
    TaskUpdated { task_id: TaskId, title: String },
    TaskDeleted { task_id: TaskId },
}

impl BoardEvent {
    pub fn publish(&self, events_tx: &tokio::sync::broadcast::Sender<String>) {
        if let Ok(payload) = serde_json::to_string(self) {
            let _ = events_tx.send(payload);
        }
    }
}

pub async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events_tx.subscribe();
    let stream = BroadcastStream::new(rx);

    let event_stream = stream.filter_map(|result| match result {
        Ok(event_json) => Some(Ok(Event::default().data(event_json))),
        Err(_) => None, // Skip lagged messages
    });

    Sse::new(event_stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
