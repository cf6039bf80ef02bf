//! Application state shared across handlers.

use std::sync::Arc;

use responder_repository::QuestionRepository;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Question repository.
    pub repository: Arc<QuestionRepository>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(config: ApiConfig, repository: QuestionRepository) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(repository),
        }
    }
}
