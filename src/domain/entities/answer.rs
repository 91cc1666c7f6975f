//! Domain entity representing a user's answer to a secret question.

use chrono::{DateTime, Utc};

/// A stored answer. Only the keyed digest of the answer text is persisted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Answer {
    pub id: i64,
    pub username: String,
    pub question_id: i64,
    pub answer_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for storing a new answer.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub username: String,
    pub question_id: i64,
    pub answer_hash: String,
}
