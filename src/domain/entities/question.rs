//! Domain entity representing a secret question.

use chrono::{DateTime, Utc};

/// A secret question users answer to prove their identity during a reset.
///
/// Administrators create questions and can disable them; disabled questions
/// stay visible in listings but accept no new answers.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_creation() {
        let new_question = NewQuestion {
            question: "What was the name of your first pet?".to_string(),
            enabled: true,
        };

        assert!(new_question.enabled);
        assert!(new_question.question.ends_with('?'));
    }
}
