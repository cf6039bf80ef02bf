//! Store for the question dataset file.

use std::io;
use std::path::PathBuf;

use responder_models::Question;
use tracing::debug;

use crate::atomic::atomic_write;
use crate::error::{PersistenceError, Result};

/// Transcodes the full dataset between one JSON file and memory.
///
/// The file holds the entire dataset as a pretty-printed JSON array of
/// questions; every save rewrites it in full. The store performs no
/// validation and keeps no in-memory state between calls.
pub struct QuestionStore {
    path: PathBuf,
}

impl QuestionStore {
    /// Creates a store over the given dataset file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the dataset file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Loads the full dataset.
    ///
    /// # Errors
    /// `ReadError` if the file cannot be read, `DecodeError` if its
    /// contents are not a valid serialized dataset.
    pub async fn load(&self) -> Result<Vec<Question>> {
        let data = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            PersistenceError::ReadError {
                path: self.path.clone(),
                source,
            }
        })?;

        serde_json::from_str(&data).map_err(|source| PersistenceError::DecodeError {
            path: self.path.clone(),
            source,
        })
    }

    /// Serializes the given dataset and overwrites the file in full.
    ///
    /// The JSON is pretty-printed with two-space indentation and keeps
    /// the answer arrays in their in-memory order. The replacement is a
    /// temp-file-plus-rename on the blocking pool, so readers never see
    /// a partial write; concurrent savers are not serialized and the
    /// last rename wins.
    pub async fn save(&self, questions: &[Question]) -> Result<()> {
        let json = serde_json::to_string_pretty(questions)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || atomic_write(&path, json.as_bytes()))
            .await
            .map_err(|e| PersistenceError::WriteError {
                path: self.path.clone(),
                source: io::Error::new(io::ErrorKind::Other, e),
            })??;

        debug!(path = %self.path.display(), count = questions.len(), "dataset saved");
        Ok(())
    }

    /// Creates the dataset file with an empty dataset if it is absent.
    ///
    /// Intended for server startup, so a fresh deployment does not need
    /// a hand-seeded file. An existing file is left untouched.
    pub async fn ensure_exists(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }
        debug!(path = %self.path.display(), "seeding empty dataset");
        self.save(&[]).await
    }
}
