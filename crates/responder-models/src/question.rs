//! Question and answer types for Responder.
//!
//! A `Question` owns its answers outright: an `Answer` has no existence
//! outside its parent question's `answers` vector, and the vector keeps
//! insertion order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{AnswerId, QuestionId};

/// A question in the forum, with its nested answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, generated by the system on creation.
    pub id: QuestionId,

    /// Who asked the question.
    pub author: String,

    /// The question text.
    pub summary: String,

    /// Answers in insertion order. Empty on creation.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Creates a new question with a fresh ID and no answers.
    pub fn new(author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(),
            author: author.into(),
            summary: summary.into(),
            answers: Vec::new(),
        }
    }

    /// Appends an answer, preserving insertion order.
    pub fn add_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }
}

/// An answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Unique identifier, generated by the system on creation.
    pub id: AnswerId,

    /// Who answered.
    pub author: String,

    /// The answer text.
    pub summary: String,
}

impl Answer {
    /// Creates a new answer with a fresh ID.
    pub fn new(author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: AnswerId::new(),
            author: author.into(),
            summary: summary.into(),
        }
    }
}

/// Raw input for creating a question.
///
/// Fields are kept as untyped JSON values so that a client sending a
/// number, null, or nothing at all still reaches the repository's
/// validation, which reports the offending field and its actual type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionInput {
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
}

impl QuestionInput {
    /// Convenience constructor for well-formed string input.
    pub fn new(author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            author: Some(Value::String(author.into())),
            summary: Some(Value::String(summary.into())),
        }
    }
}

/// Raw input for creating an answer. Same shape as [`QuestionInput`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerInput {
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
}

impl AnswerInput {
    /// Convenience constructor for well-formed string input.
    pub fn new(author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            author: Some(Value::String(author.into())),
            summary: Some(Value::String(summary.into())),
        }
    }
}
