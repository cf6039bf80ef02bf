//! Response DTOs for the API.
//!
//! Request bodies deserialize straight into the model input types
//! (`QuestionInput`, `AnswerInput`), which keep their fields as raw JSON
//! so the repository can report type errors field by field.

use serde::Serialize;

use responder_models::{Answer, Question};

/// Welcome message for the root route.
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: String,
}

impl WelcomeResponse {
    /// The standard greeting.
    pub fn new() -> Self {
        Self {
            message: "Welcome to responder!".to_string(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Response for a successfully created question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCreatedResponse {
    /// Always true; failures surface as error responses instead.
    pub success: bool,
    /// The created question, generated id included.
    pub question: Question,
}

impl QuestionCreatedResponse {
    /// Wraps a freshly created question.
    pub fn new(question: Question) -> Self {
        Self {
            success: true,
            question,
        }
    }
}

/// Response for a successfully created answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerCreatedResponse {
    /// Always true; failures surface as error responses instead.
    pub success: bool,
    /// The created answer, generated id included.
    pub answer: Answer,
}

impl AnswerCreatedResponse {
    /// Wraps a freshly created answer.
    pub fn new(answer: Answer) -> Self {
        Self {
            success: true,
            answer,
        }
    }
}
