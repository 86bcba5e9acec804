use axum::http::HeaderValue;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;
use crate::config::Config;

pub fn create_router(state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origin
        .split(',')
        .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let task_routes = Router::new()
        .route(
            "/{id}",
            patch(handlers::tasks::edit_task).delete(handlers::tasks::delete_task),
        )
        .route("/{id}/move", patch(handlers::tasks::move_task));

    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/health/live", get(handlers::liveness))
        .route("/api/events", get(handlers::sse::sse_handler))
        .route("/ws/events", get(handlers::ws::ws_events_handler))
        .route("/api/board", get(handlers::board::get_board))
        .route("/api/board/reload", post(handlers::board::reload_board))
        .route("/api/board/drag", post(handlers::board::drag_end))
        .nest("/api/tasks", task_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let serve_dir = ServeDir::new(&config.frontend_dir).not_found_service(
        ServeDir::new(&config.frontend_dir).append_index_html_on_directories(true),
    );

    api_routes.fallback_service(serve_dir)
}
