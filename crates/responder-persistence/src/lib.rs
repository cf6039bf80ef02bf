//! Persistence layer for Responder.
//!
//! The entire dataset lives in a single JSON file; this crate transcodes
//! between that file and an in-memory `Vec<Question>`. Writes replace the
//! file in full via an atomic rename (write to temp file, then rename),
//! so readers never observe a half-written dataset. No validation happens
//! here and no lock is taken: concurrent writers race and the last rename
//! wins.
//!
//! # Example
//!
//! ```no_run
//! use responder_persistence::QuestionStore;
//!
//! # async fn demo() -> responder_persistence::Result<()> {
//! let store = QuestionStore::new("questions.json");
//! let mut questions = store.load().await?;
//! questions.push(responder_models::Question::new("Jack London", "What is my name?"));
//! store.save(&questions).await?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod error;
pub mod question_store;

pub use error::{PersistenceError, Result};
pub use question_store::QuestionStore;
