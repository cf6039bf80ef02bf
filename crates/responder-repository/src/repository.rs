//! QuestionRepository - validation, id assignment, and dataset mutation.

use responder_models::{Answer, AnswerId, AnswerInput, Question, QuestionId, QuestionInput};
use responder_persistence::QuestionStore;
use serde_json::Value;
use tracing::debug;

use crate::error::{RepositoryError, Result, ValidationError};

/// Repository over the question dataset.
///
/// Owns validation and identifier generation; the store underneath it is
/// a pure transcoding boundary. Each call loads the dataset fresh (no
/// cache persists between calls) and mutations rewrite it in full, so
/// every operation is independently restartable. No lock is taken:
/// concurrent mutations race on the whole-file write and the last save
/// wins.
pub struct QuestionRepository {
    store: QuestionStore,
}

impl QuestionRepository {
    /// Creates a repository over the given store.
    pub fn new(store: QuestionStore) -> Self {
        Self { store }
    }

    /// Returns the full ordered dataset.
    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.store.load().await?)
    }

    /// Finds a question by id. `Ok(None)` if no question has that id.
    pub async fn get_question(&self, id: &QuestionId) -> Result<Option<Question>> {
        let questions = self.store.load().await?;
        Ok(questions.into_iter().find(|q| &q.id == id))
    }

    /// Validates the input, appends a new question to the end of the
    /// dataset, and persists the full dataset.
    ///
    /// # Errors
    /// [`ValidationError`] if `author` or `summary` is missing, not a
    /// string, or blank.
    pub async fn add_question(&self, input: QuestionInput) -> Result<Question> {
        let mut questions = self.store.load().await?;

        let author = required_string("author", input.author.as_ref(), true)?;
        let summary = required_string("summary", input.summary.as_ref(), true)?;

        let question = Question::new(author, summary);
        debug!(id = %question.id, "adding question");

        questions.push(question.clone());
        self.store.save(&questions).await?;

        Ok(question)
    }

    /// Returns a question's answers in insertion order, possibly empty.
    /// `Ok(None)` if the question does not exist.
    pub async fn list_answers(&self, question_id: &QuestionId) -> Result<Option<Vec<Answer>>> {
        Ok(self.get_question(question_id).await?.map(|q| q.answers))
    }

    /// Finds one answer of a question. `Ok(None)` if either the question
    /// or the answer does not exist.
    pub async fn get_answer(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> Result<Option<Answer>> {
        let answers = match self.list_answers(question_id).await? {
            Some(answers) => answers,
            None => return Ok(None),
        };
        Ok(answers.into_iter().find(|a| &a.id == answer_id))
    }

    /// Validates the input, appends a new answer to the question's
    /// answer list, and persists the full dataset.
    ///
    /// The question is resolved before the fields are validated, so a
    /// bad input against a missing question reports the missing question.
    ///
    /// # Errors
    /// [`RepositoryError::QuestionNotFound`] if no question has the given
    /// id; [`ValidationError`] if `author` or `summary` is missing or not
    /// a string.
    pub async fn add_answer(
        &self,
        question_id: &QuestionId,
        input: AnswerInput,
    ) -> Result<Answer> {
        let mut questions = self.store.load().await?;

        let question = questions
            .iter_mut()
            .find(|q| &q.id == question_id)
            .ok_or_else(|| RepositoryError::QuestionNotFound(question_id.clone()))?;

        let author = required_string("author", input.author.as_ref(), false)?;
        let summary = required_string("summary", input.summary.as_ref(), false)?;

        let answer = Answer::new(author, summary);
        debug!(question = %question_id, id = %answer.id, "adding answer");

        question.add_answer(answer.clone());
        self.store.save(&questions).await?;

        Ok(answer)
    }
}

/// Extracts a required string field from raw input.
///
/// `reject_blank` additionally refuses empty/whitespace-only strings;
/// question fields must be non-empty while answer fields only need to be
/// strings.
fn required_string(
    field: &'static str,
    value: Option<&Value>,
    reject_blank: bool,
) -> std::result::Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) if reject_blank && s.trim().is_empty() => {
            Err(ValidationError::EmptyField { field })
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::NotAString {
            field,
            actual: json_type_name(other),
        }),
    }
}

/// Name of a JSON value's type, for validation error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::{tempdir, TempDir};

    fn make_test_repo() -> (TempDir, QuestionRepository) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test-questions.json");
        std::fs::write(&path, "[]").unwrap();
        (dir, QuestionRepository::new(QuestionStore::new(path)))
    }

    async fn seed(repo: &QuestionRepository, questions: &[Question]) {
        let store = QuestionStore::new(repo.store.path());
        store.save(questions).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_questions_empty() {
        let (_dir, repo) = make_test_repo();
        assert!(repo.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_questions_returns_all_in_order() {
        let (_dir, repo) = make_test_repo();
        seed(
            &repo,
            &[
                Question::new("Jack London", "What is my name?"),
                Question::new("Tim Doods", "Who are you?"),
            ],
        )
        .await;

        let questions = repo.list_questions().await.unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].author, "Jack London");
        assert_eq!(questions[1].author, "Tim Doods");
    }

    #[tokio::test]
    async fn test_get_question_by_id() {
        let (_dir, repo) = make_test_repo();
        let questions = vec![
            Question::new("Jack London", "What is my name?"),
            Question::new("Tim Doods", "Who are you?"),
        ];
        seed(&repo, &questions).await;

        let found = repo.get_question(&questions[1].id).await.unwrap().unwrap();
        assert_eq!(found, questions[1]);
    }

    #[tokio::test]
    async fn test_get_question_missing_is_none() {
        let (_dir, repo) = make_test_repo();
        seed(&repo, &[Question::new("Jack London", "What is my name?")]).await;

        let found = repo.get_question(&QuestionId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_add_question_grows_dataset() {
        let (_dir, repo) = make_test_repo();

        let before = repo.list_questions().await.unwrap().len();
        repo.add_question(QuestionInput::new("Tim Doods", "Who are you?"))
            .await
            .unwrap();

        let after = repo.list_questions().await.unwrap();
        assert!(after.len() > before);
    }

    #[tokio::test]
    async fn test_add_question_appends_matching_record() {
        let (_dir, repo) = make_test_repo();

        repo.add_question(QuestionInput::new("Jack London", "What is my name?"))
            .await
            .unwrap();

        let questions = repo.list_questions().await.unwrap();
        let last = questions.last().unwrap();
        assert_eq!(last.author, "Jack London");
        assert_eq!(last.summary, "What is my name?");
        assert!(!last.id.as_str().is_empty());
        assert!(last.answers.is_empty());
    }

    #[tokio::test]
    async fn test_add_question_ids_are_unique() {
        let (_dir, repo) = make_test_repo();

        repo.add_question(QuestionInput::new("Tim Doods", "Who are you?"))
            .await
            .unwrap();
        repo.add_question(QuestionInput::new("Jack London", "What is my name?"))
            .await
            .unwrap();

        let questions = repo.list_questions().await.unwrap();
        assert_ne!(questions[0].id, questions[1].id);
    }

    #[tokio::test]
    async fn test_add_question_rejects_non_string_fields() {
        let (_dir, repo) = make_test_repo();

        for input in [
            json!({"author": 123, "summary": "Who are you?"}),
            json!({"author": "Jim Smith", "summary": 321}),
            json!({"author": 123, "summary": 321}),
        ] {
            let input: QuestionInput = serde_json::from_value(input).unwrap();
            let result = repo.add_question(input).await;
            assert!(matches!(
                result,
                Err(RepositoryError::Validation(ValidationError::NotAString { .. }))
            ));
        }
    }

    #[tokio::test]
    async fn test_add_question_rejects_missing_fields() {
        let (_dir, repo) = make_test_repo();

        for input in [
            json!({"summary": "Who are you?"}),
            json!({"author": "Jim Smith"}),
            json!({}),
        ] {
            let input: QuestionInput = serde_json::from_value(input).unwrap();
            let result = repo.add_question(input).await;
            assert!(matches!(
                result,
                Err(RepositoryError::Validation(ValidationError::MissingField { .. }))
            ));
        }
    }

    #[tokio::test]
    async fn test_add_question_rejects_blank_fields() {
        let (_dir, repo) = make_test_repo();

        let result = repo
            .add_question(QuestionInput::new("  ", "Who are you?"))
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::Validation(ValidationError::EmptyField {
                field: "author"
            }))
        ));
    }

    #[tokio::test]
    async fn test_failed_validation_leaves_dataset_unchanged() {
        let (_dir, repo) = make_test_repo();

        let input: QuestionInput = serde_json::from_value(json!({"summary": "x"})).unwrap();
        assert!(repo.add_question(input).await.is_err());

        assert!(repo.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_answers_empty_is_some() {
        let (_dir, repo) = make_test_repo();
        let question = Question::new("Jack London", "What is my name?");
        let id = question.id.clone();
        seed(&repo, &[question]).await;

        let answers = repo.list_answers(&id).await.unwrap();
        assert_eq!(answers, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_list_answers_missing_question_is_none() {
        let (_dir, repo) = make_test_repo();
        assert!(repo.list_answers(&QuestionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_answers_returns_all_in_order() {
        let (_dir, repo) = make_test_repo();
        let mut question = Question::new("Jack London", "What is my name?");
        question.add_answer(Answer::new("Brian McKenzie", "The Earth is flat."));
        question.add_answer(Answer::new("Dr Strange", "It is egg-shaped."));
        let id = question.id.clone();
        let expected = question.answers.clone();
        seed(&repo, &[question]).await;

        let answers = repo.list_answers(&id).await.unwrap().unwrap();
        assert_eq!(answers, expected);
    }

    #[tokio::test]
    async fn test_get_answer_by_id() {
        let (_dir, repo) = make_test_repo();
        let mut question = Question::new("Jack London", "What is my name?");
        question.add_answer(Answer::new("Brian McKenzie", "The Earth is flat."));
        question.add_answer(Answer::new("Dr Strange", "It is egg-shaped."));
        let question_id = question.id.clone();
        let target = question.answers[0].clone();
        seed(&repo, &[question]).await;

        let found = repo
            .get_answer(&question_id, &target.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, target);
    }

    #[tokio::test]
    async fn test_get_answer_missing_question_is_none() {
        let (_dir, repo) = make_test_repo();
        let found = repo
            .get_answer(&QuestionId::new(), &AnswerId::new())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_answer_missing_answer_is_none() {
        let (_dir, repo) = make_test_repo();
        let question = Question::new("Jack London", "What is my name?");
        let id = question.id.clone();
        seed(&repo, &[question]).await;

        let found = repo.get_answer(&id, &AnswerId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_add_answer_missing_question_raises() {
        let (_dir, repo) = make_test_repo();

        let result = repo
            .add_answer(&QuestionId::new(), AnswerInput::new("A", "B"))
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::QuestionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_add_answer_appends_and_persists() {
        let (_dir, repo) = make_test_repo();
        let question = Question::new("Jack London", "What is my name?");
        let id = question.id.clone();
        seed(&repo, &[question]).await;

        let answer = repo
            .add_answer(&id, AnswerInput::new("Tim", "42"))
            .await
            .unwrap();

        let answers = repo.list_answers(&id).await.unwrap().unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0], answer);
        assert_eq!(answers[0].author, "Tim");
        assert_eq!(answers[0].summary, "42");
    }

    #[tokio::test]
    async fn test_add_answer_preserves_insertion_order() {
        let (_dir, repo) = make_test_repo();
        let question = Question::new("Jack London", "What is my name?");
        let id = question.id.clone();
        seed(&repo, &[question]).await;

        repo.add_answer(&id, AnswerInput::new("Tim", "first"))
            .await
            .unwrap();
        repo.add_answer(&id, AnswerInput::new("Jack", "second"))
            .await
            .unwrap();

        let answers = repo.list_answers(&id).await.unwrap().unwrap();
        assert_eq!(answers[0].summary, "first");
        assert_eq!(answers[1].summary, "second");
    }

    #[tokio::test]
    async fn test_add_answer_accepts_blank_fields() {
        // Answer fields only need to be strings; unlike question fields,
        // blank ones are fine.
        let (_dir, repo) = make_test_repo();
        let question = Question::new("Jack London", "What is my name?");
        let id = question.id.clone();
        seed(&repo, &[question]).await;

        let answer = repo
            .add_answer(&id, AnswerInput::new("", "  "))
            .await
            .unwrap();
        assert_eq!(answer.author, "");
        assert_eq!(answer.summary, "  ");

        let answers = repo.list_answers(&id).await.unwrap().unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0], answer);
    }

    #[tokio::test]
    async fn test_add_answer_rejects_invalid_fields() {
        let (_dir, repo) = make_test_repo();
        let question = Question::new("Jack London", "What is my name?");
        let id = question.id.clone();
        seed(&repo, &[question]).await;

        for input in [
            json!({"author": 123, "summary": "2"}),
            json!({"author": "Jim Smith", "summary": 321}),
            json!({"author": "Jim Smith"}),
            json!({"summary": "2"}),
            json!({}),
        ] {
            let input: AnswerInput = serde_json::from_value(input).unwrap();
            let result = repo.add_answer(&id, input).await;
            assert!(matches!(result, Err(RepositoryError::Validation(_))));
        }

        // Nothing was persisted.
        assert!(repo.list_answers(&id).await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let (_dir, repo) = make_test_repo();

        assert!(repo.list_questions().await.unwrap().is_empty());

        let question = repo
            .add_question(QuestionInput::new("Jack London", "What is my name?"))
            .await
            .unwrap();

        let questions = repo.list_questions().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions.last().unwrap().summary, "What is my name?");
        assert!(questions.last().unwrap().answers.is_empty());

        let answer = repo
            .add_answer(&question.id, AnswerInput::new("Tim", "42"))
            .await
            .unwrap();

        assert_eq!(repo.list_answers(&question.id).await.unwrap().unwrap().len(), 1);

        let fetched = repo
            .get_answer(&question.id, &answer.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.author, "Tim");
        assert_eq!(fetched.summary, "42");
    }

    // There is deliberately no lock around load-mutate-save; two racing
    // mutations may lose one update but must never corrupt the file.
    #[tokio::test]
    async fn test_concurrent_adds_never_corrupt_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test-questions.json");
        std::fs::write(&path, "[]").unwrap();

        let repo_a = QuestionRepository::new(QuestionStore::new(&path));
        let repo_b = QuestionRepository::new(QuestionStore::new(&path));

        let a = tokio::spawn(async move {
            repo_a
                .add_question(QuestionInput::new("Tim Doods", "Who are you?"))
                .await
        });
        let b = tokio::spawn(async move {
            repo_b
                .add_question(QuestionInput::new("Jack London", "What is my name?"))
                .await
        });

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        // Last writer may have discarded the other's record (accepted
        // hazard), but the dataset stays well-formed.
        let survivors = QuestionRepository::new(QuestionStore::new(&path))
            .list_questions()
            .await
            .unwrap();
        assert!((1..=2).contains(&survivors.len()));
    }
}
