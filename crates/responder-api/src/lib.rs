//! HTTP API for Responder.
//!
//! This crate maps the question repository onto a small REST surface:
//! - List and create questions
//! - Fetch a question by id
//! - List, create, and fetch the answers nested under a question
//!
//! # Example
//!
//! ```ignore
//! use responder_api::{ApiConfig, AppState, serve};
//! use responder_persistence::QuestionStore;
//! use responder_repository::QuestionRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = QuestionRepository::new(QuestionStore::new("questions.json"));
//!     let state = AppState::new(ApiConfig::default(), repository);
//!
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
