//! Core data models for Responder.
//!
//! This crate provides the fundamental data types of the question/answer
//! forum: questions, their nested answers, the typed identifiers both
//! carry, and the raw create-input types that flow into validation.

pub mod ids;
pub mod question;

// Re-export main types
pub use ids::{AnswerId, QuestionId};
pub use question::{Answer, AnswerInput, Question, QuestionInput};
