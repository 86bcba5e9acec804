use axum::{extract::State, Json};

use crate::api::dto::{BoardResponse, MoveResponse};
use crate::api::AppState;
use crate::domain::DragEvent;
use crate::services::BoardService;

pub async fn get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let store = state.board.read().await;
    Json(BoardResponse::from_store(&store))
}

/// Re-runs the seed load. A failed fetch is reported through `seed_status`
/// rather than as an error response.
pub async fn reload_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let client = state.seed_client();
    BoardService::load_seed(&state.board, &state.events_tx, &client).await;

    let store = state.board.read().await;
    Json(BoardResponse::from_store(&store))
}

pub async fn drag_end(
    State(state): State<AppState>,
    Json(event): Json<DragEvent>,
) -> Json<MoveResponse> {
    let outcome = BoardService::apply_drag(&state.board, &state.events_tx, &event).await;

    let store = state.board.read().await;
    Json(MoveResponse::new(outcome, BoardResponse::from_store(&store)))
}
