//! Question handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use responder_models::{Question, QuestionId, QuestionInput};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::QuestionCreatedResponse;

/// GET /questions - List all questions.
pub async fn list_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>> {
    let questions = state.repository.list_questions().await?;
    Ok(Json(questions))
}

/// POST /questions - Create a new question.
pub async fn create_question(
    State(state): State<AppState>,
    Json(input): Json<QuestionInput>,
) -> Result<(StatusCode, Json<QuestionCreatedResponse>)> {
    let question = state.repository.add_question(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(QuestionCreatedResponse::new(question)),
    ))
}

/// GET /questions/:id - Get a question by ID.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Question>> {
    let id = QuestionId::from_string(id);
    let question = state
        .repository
        .get_question(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("question not found: {}", id)))?;

    Ok(Json(question))
}
