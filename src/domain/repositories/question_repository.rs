//! Repository trait for secret questions.

use crate::domain::entities::{NewQuestion, Question};
use crate::domain::page::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing secret questions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteQuestionRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Creates a new question.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the same question text already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError>;

    /// Finds a question by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError>;

    /// Returns one page of questions ordered by ID, optionally filtered by
    /// `enabled`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn paginate(
        &self,
        enabled: Option<bool>,
        request: PageRequest,
    ) -> Result<Page<Question>, AppError>;

    /// Sets the `enabled` flag of a question.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the question does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_enabled(&self, id: i64, enabled: bool) -> Result<Question, AppError>;

    /// Cheap round-trip used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
