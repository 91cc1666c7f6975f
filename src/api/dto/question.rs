//! DTOs for secret question endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Question;

/// Request to create a secret question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 256, message = "Question must be 1-256 characters"))]
    pub question: String,

    /// Defaults to `true`.
    pub enabled: Option<bool>,
}

/// Request to enable or disable a question.
#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub enabled: bool,
}

/// Secret question as returned by the API.
#[derive(Debug, Serialize)]
pub struct QuestionItem {
    pub id: i64,
    pub question: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionItem {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            enabled: q.enabled,
            created_at: q.created_at,
        }
    }
}
