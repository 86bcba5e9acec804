use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::{
    BoardResponse, EditTaskRequest, MoveResponse, MoveTaskRequest, MutationResponse,
};
use crate::api::AppState;
use crate::domain::{BoardError, Column, TaskId};
use crate::services::BoardService;

fn parse_task_id(raw: &str) -> Result<TaskId, BoardError> {
    raw.trim()
        .parse::<TaskId>()
        .map_err(|_| BoardError::BadRequest(format!("Invalid task id: {}", raw)))
}

pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<EditTaskRequest>,
) -> Result<Json<MutationResponse>, BoardError> {
    let id = parse_task_id(&id)?;
    let title = req
        .title
        .ok_or_else(|| BoardError::BadRequest("title is required".into()))?;

    let applied = BoardService::edit_task(&state.board, &state.events_tx, id, &title).await;
    Ok(Json(MutationResponse { applied }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>, BoardError> {
    let id = parse_task_id(&id)?;
    let applied = BoardService::delete_task(&state.board, &state.events_tx, id).await;
    Ok(Json(MutationResponse { applied }))
}

pub async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveTaskRequest>,
) -> Result<Json<MoveResponse>, BoardError> {
    let id = parse_task_id(&id)?;
    let source: Column = req.source.parse().map_err(BoardError::BadRequest)?;
    let destination = req
        .destination
        .as_deref()
        .map(str::parse::<Column>)
        .transpose()
        .map_err(BoardError::BadRequest)?;

    let outcome =
        BoardService::move_task(&state.board, &state.events_tx, source, destination, id).await;

    let store = state.board.read().await;
    Ok(Json(MoveResponse::new(outcome, BoardResponse::from_store(&store))))
}
