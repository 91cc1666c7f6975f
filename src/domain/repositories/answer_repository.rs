//! Repository trait for users' secret answers.

use crate::domain::entities::{Answer, NewAnswer};
use crate::domain::page::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and listing secret answers.
///
/// A user has at most one answer per question.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Stores a new answer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user already answered the question.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_answer: NewAnswer) -> Result<Answer, AppError>;

    /// Returns one page of the user's answers ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn paginate_for_user(
        &self,
        username: &str,
        request: PageRequest,
    ) -> Result<Page<Answer>, AppError>;
}
