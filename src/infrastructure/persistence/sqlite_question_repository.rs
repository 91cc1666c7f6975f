//! SQLite implementation of the question repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewQuestion, Question};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repositories::QuestionRepository;
use crate::error::AppError;
use serde_json::json;

/// SQLite repository for secret questions.
pub struct SqliteQuestionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteQuestionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, enabled)
            VALUES (?1, ?2)
            RETURNING id, question, enabled, created_at
            "#,
        )
        .bind(&new_question.question)
        .bind(new_question.enabled)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(question)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, enabled, created_at FROM questions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(question)
    }

    async fn paginate(
        &self,
        enabled: Option<bool>,
        request: PageRequest,
    ) -> Result<Page<Question>, AppError> {
        let items = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, enabled, created_at
            FROM questions
            WHERE (?1 IS NULL OR enabled = ?1)
            ORDER BY id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(enabled)
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(self.pool.as_ref());

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM questions WHERE (?1 IS NULL OR enabled = ?1)",
        )
        .bind(enabled)
        .fetch_one(self.pool.as_ref());

        let (items, total) = tokio::try_join!(items, total)?;

        Ok(Page::new(items, request, total))
    }

    async fn set_enabled(&self, id: i64, enabled: bool) -> Result<Question, AppError> {
        sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions SET enabled = ?2
            WHERE id = ?1
            RETURNING id, question, enabled, created_at
            "#,
        )
        .bind(id)
        .bind(enabled)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Question not found", json!({ "id": id })))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
