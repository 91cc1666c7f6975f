//! DTOs for secret answer endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Answer;

/// Request to answer a secret question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    #[validate(range(min = 1, message = "question_id must be positive"))]
    pub question_id: i64,

    #[validate(length(min = 1, max = 256, message = "Answer must be 1-256 characters"))]
    pub answer: String,
}

/// A stored answer as returned by the API. The answer hash is never exposed.
#[derive(Debug, Serialize)]
pub struct AnswerItem {
    pub id: i64,
    pub username: String,
    pub question_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Answer> for AnswerItem {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            username: a.username,
            question_id: a.question_id,
            created_at: a.created_at,
        }
    }
}
