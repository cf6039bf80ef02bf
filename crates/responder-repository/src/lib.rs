//! Question repository for Responder.
//!
//! The sole path through which the dataset is mutated. Every operation
//! loads the full dataset from the store, works on the in-memory copy,
//! and (for mutations) writes the full dataset back before returning:
//! read-compute-write with no cross-call state and no lock.
//!
//! Reads signal a missing record with `Ok(None)`; the one write path that
//! references an existing record (`add_answer`) raises
//! [`RepositoryError::QuestionNotFound`] instead. Callers branch on the
//! two forms differently, so they are kept distinct.
//!
//! # Example
//!
//! ```no_run
//! use responder_models::QuestionInput;
//! use responder_persistence::QuestionStore;
//! use responder_repository::QuestionRepository;
//!
//! # async fn demo() -> responder_repository::Result<()> {
//! let repo = QuestionRepository::new(QuestionStore::new("questions.json"));
//! let question = repo
//!     .add_question(QuestionInput::new("Jack London", "What is my name?"))
//!     .await?;
//! println!("created {}", question.id);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod repository;

pub use error::{RepositoryError, Result, ValidationError};
pub use repository::QuestionRepository;
