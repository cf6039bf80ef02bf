//! Router configuration and server setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Welcome and health
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        // Questions
        .route("/questions", get(handlers::list_questions))
        .route("/questions", post(handlers::create_question))
        .route("/questions/:id", get(handlers::get_question))
        // Answers
        .route("/questions/:id/answers", get(handlers::list_answers))
        .route("/questions/:id/answers", post(handlers::create_answer))
        .route(
            "/questions/:id/answers/:answer_id",
            get(handlers::get_answer),
        )
        // Apply middleware
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Responder listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}
