//! Service for users' secret answers.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Answer, NewAnswer};
use crate::domain::page::{Page, PageRequest};
use crate::domain::repositories::{AnswerRepository, QuestionRepository};
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Stores and lists the answers a user gave to secret questions.
///
/// Answers are hashed with HMAC-SHA256 keyed by the application secret before
/// storage, so a copy of the database alone cannot be used to check guesses.
pub struct AnswerService<A: AnswerRepository, Q: QuestionRepository> {
    answers: Arc<A>,
    questions: Arc<Q>,
    secret_key: String,
}

impl<A: AnswerRepository, Q: QuestionRepository> AnswerService<A, Q> {
    /// Creates a new answer service.
    ///
    /// # Arguments
    ///
    /// - `secret_key` - HMAC key; changing it invalidates every stored answer
    pub fn new(answers: Arc<A>, questions: Arc<Q>, secret_key: String) -> Self {
        Self {
            answers,
            questions,
            secret_key,
        }
    }

    /// Hashes an answer with HMAC-SHA256 using the application secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_answer(&self, answer: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(answer.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Stores the user's answer to a question.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the answer is empty or the question
    /// does not exist or is disabled.
    /// Returns [`AppError::Conflict`] if the user already answered the question.
    pub async fn create_answer(
        &self,
        username: &str,
        question_id: i64,
        answer: &str,
    ) -> Result<Answer, AppError> {
        if answer.trim().is_empty() {
            return Err(AppError::bad_request("Answer must not be empty", json!({})));
        }

        match self.questions.find_by_id(question_id).await? {
            Some(question) if question.enabled => {}
            Some(_) => {
                return Err(AppError::bad_request(
                    "The question is disabled",
                    json!({ "question_id": question_id }),
                ));
            }
            None => {
                return Err(AppError::bad_request(
                    "The question does not exist",
                    json!({ "question_id": question_id }),
                ));
            }
        }

        let new_answer = NewAnswer {
            username: username.to_string(),
            question_id,
            answer_hash: self.hash_answer(answer),
        };

        let created = self.answers.create(new_answer).await.map_err(|e| match e {
            AppError::Conflict { .. } => AppError::conflict(
                "You have already answered this question",
                json!({ "question_id": question_id }),
            ),
            other => other,
        })?;

        tracing::info!(username, question_id, "Secret answer stored");

        Ok(created)
    }

    /// Lists one page of the user's answers.
    pub async fn list_answers(
        &self,
        username: &str,
        request: PageRequest,
    ) -> Result<Page<Answer>, AppError> {
        self.answers.paginate_for_user(username, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Question;
    use crate::domain::repositories::{MockAnswerRepository, MockQuestionRepository};
    use chrono::Utc;

    fn test_secret() -> String {
        "test-secret-key".to_string()
    }

    fn compute_expected_hash(answer: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(answer.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn questions_returning(enabled: Option<bool>) -> MockQuestionRepository {
        let mut mock = MockQuestionRepository::new();
        mock.expect_find_by_id().returning(move |id| {
            Ok(enabled.map(|enabled| Question {
                id,
                question: "Favourite colour?".to_string(),
                enabled,
                created_at: Utc::now(),
            }))
        });
        mock
    }

    #[tokio::test]
    async fn test_create_answer_stores_hash() {
        let mut answers = MockAnswerRepository::new();
        let expected_hash = compute_expected_hash("blue");

        answers
            .expect_create()
            .withf(move |a| {
                a.username == "jdoe" && a.question_id == 3 && a.answer_hash == expected_hash
            })
            .times(1)
            .returning(|a| {
                Ok(Answer {
                    id: 1,
                    username: a.username,
                    question_id: a.question_id,
                    answer_hash: a.answer_hash,
                    created_at: Utc::now(),
                })
            });

        let service = AnswerService::new(
            Arc::new(answers),
            Arc::new(questions_returning(Some(true))),
            test_secret(),
        );

        let created = service.create_answer("jdoe", 3, "blue").await.unwrap();

        assert_eq!(created.answer_hash.len(), 64);
        assert_ne!(created.answer_hash, "blue");
    }

    #[tokio::test]
    async fn test_create_answer_disabled_question() {
        let service = AnswerService::new(
            Arc::new(MockAnswerRepository::new()),
            Arc::new(questions_returning(Some(false))),
            test_secret(),
        );

        let result = service.create_answer("jdoe", 3, "blue").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_answer_unknown_question() {
        let service = AnswerService::new(
            Arc::new(MockAnswerRepository::new()),
            Arc::new(questions_returning(None)),
            test_secret(),
        );

        let result = service.create_answer("jdoe", 99, "blue").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_answer_empty() {
        let service = AnswerService::new(
            Arc::new(MockAnswerRepository::new()),
            Arc::new(MockQuestionRepository::new()),
            test_secret(),
        );

        let result = service.create_answer("jdoe", 3, "  ").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_answer_twice() {
        let mut answers = MockAnswerRepository::new();
        answers
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = AnswerService::new(
            Arc::new(answers),
            Arc::new(questions_returning(Some(true))),
            test_secret(),
        );

        let result = service.create_answer("jdoe", 3, "blue").await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[test]
    fn test_hash_secret_matters() {
        let svc1 = AnswerService::new(
            Arc::new(MockAnswerRepository::new()),
            Arc::new(MockQuestionRepository::new()),
            "secret-a".to_string(),
        );
        let svc2 = AnswerService::new(
            Arc::new(MockAnswerRepository::new()),
            Arc::new(MockQuestionRepository::new()),
            "secret-b".to_string(),
        );

        assert_ne!(svc1.hash_answer("blue"), svc2.hash_answer("blue"));
        assert_eq!(svc1.hash_answer("blue"), svc1.hash_answer("blue"));
    }
}
