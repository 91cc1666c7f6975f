//! SQLite implementation of the answer repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Answer, NewAnswer};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repositories::AnswerRepository;
use crate::error::AppError;

/// SQLite repository for users' secret answers.
///
/// The `(username, question_id)` pair is unique; a second answer to the same
/// question surfaces as [`AppError::Conflict`].
pub struct SqliteAnswerRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAnswerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for SqliteAnswerRepository {
    async fn create(&self, new_answer: NewAnswer) -> Result<Answer, AppError> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (username, question_id, answer_hash)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, question_id, answer_hash, created_at
            "#,
        )
        .bind(&new_answer.username)
        .bind(new_answer.question_id)
        .bind(&new_answer.answer_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(answer)
    }

    async fn paginate_for_user(
        &self,
        username: &str,
        request: PageRequest,
    ) -> Result<Page<Answer>, AppError> {
        let items = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, username, question_id, answer_hash, created_at
            FROM answers
            WHERE username = ?1
            ORDER BY id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(username)
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(self.pool.as_ref());

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM answers WHERE username = ?1")
            .bind(username)
            .fetch_one(self.pool.as_ref());

        let (items, total) = tokio::try_join!(items, total)?;

        Ok(Page::new(items, request, total))
    }
}
