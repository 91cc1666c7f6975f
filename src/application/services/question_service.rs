//! Secret question management service.

use crate::domain::entities::{NewQuestion, Question};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repositories::QuestionRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Maximum length of a question, in characters.
pub const MAX_QUESTION_LEN: usize = 256;

/// Service for managing the secret questions users can answer.
pub struct QuestionService<R: QuestionRepository> {
    repository: Arc<R>,
}

impl<R: QuestionRepository> QuestionService<R> {
    /// Creates a new question service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new question.
    ///
    /// Surrounding whitespace is trimmed before storing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the question is empty or too long.
    /// Returns [`AppError::Conflict`] if the question already exists.
    pub async fn create_question(
        &self,
        question: String,
        enabled: bool,
    ) -> Result<Question, AppError> {
        let question = question.trim().to_string();

        if question.is_empty() {
            return Err(AppError::bad_request(
                "Question must not be empty",
                json!({}),
            ));
        }

        let len = question.chars().count();
        if len > MAX_QUESTION_LEN {
            return Err(AppError::bad_request(
                "Question is too long",
                json!({ "max_length": MAX_QUESTION_LEN, "length": len }),
            ));
        }

        let created = self
            .repository
            .create(NewQuestion { question, enabled })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => {
                    AppError::conflict("Question already exists", json!({}))
                }
                other => other,
            })?;

        tracing::info!(question_id = created.id, "Question created");

        Ok(created)
    }

    /// Retrieves a question by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the question does not exist.
    pub async fn get_question(&self, id: i64) -> Result<Question, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found", json!({ "id": id })))
    }

    /// Lists one page of questions, optionally filtered by `enabled`.
    pub async fn list_questions(
        &self,
        enabled: Option<bool>,
        request: PageRequest,
    ) -> Result<Page<Question>, AppError> {
        self.repository.paginate(enabled, request).await
    }

    /// Enables or disables a question.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the question does not exist.
    pub async fn set_enabled(&self, id: i64, enabled: bool) -> Result<Question, AppError> {
        let question = self.repository.set_enabled(id, enabled).await?;
        tracing::info!(question_id = id, enabled, "Question updated");
        Ok(question)
    }

    /// Checks that the backing store answers.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
