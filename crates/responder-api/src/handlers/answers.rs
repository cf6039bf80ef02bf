//! Answer handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use responder_models::{Answer, AnswerId, AnswerInput, QuestionId};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::AnswerCreatedResponse;

/// GET /questions/:id/answers - List a question's answers.
pub async fn list_answers(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<Vec<Answer>>> {
    let question_id = QuestionId::from_string(question_id);
    let answers = state
        .repository
        .list_answers(&question_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("question not found: {}", question_id)))?;

    Ok(Json(answers))
}

/// POST /questions/:id/answers - Add an answer to a question.
pub async fn create_answer(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    Json(input): Json<AnswerInput>,
) -> Result<(StatusCode, Json<AnswerCreatedResponse>)> {
    let question_id = QuestionId::from_string(question_id);
    let answer = state.repository.add_answer(&question_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AnswerCreatedResponse::new(answer)),
    ))
}

/// GET /questions/:id/answers/:answer_id - Get one answer of a question.
pub async fn get_answer(
    State(state): State<AppState>,
    Path((question_id, answer_id)): Path<(String, String)>,
) -> Result<Json<Answer>> {
    let question_id = QuestionId::from_string(question_id);
    let answer_id = AnswerId::from_string(answer_id);
    let answer = state
        .repository
        .get_answer(&question_id, &answer_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "question or answer not found: {}/{}",
                question_id, answer_id
            ))
        })?;

    Ok(Json(answer))
}
