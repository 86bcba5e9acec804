use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors a handler can return to the client.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            BoardError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Failures while loading the seed list. These are recorded in the seed
/// status and never sent as an error response.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("seed source responded with status {0}")]
    Status(u16),

    #[error("invalid seed payload: {0}")]
    InvalidPayload(String),
}
