use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AnswerService, AuthService, QuestionService};
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteAnswerRepository, SqliteQuestionRepository};

pub type AppQuestionService = QuestionService<SqliteQuestionRepository>;
pub type AppAnswerService = AnswerService<SqliteAnswerRepository, SqliteQuestionRepository>;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_service: Arc<AuthService>,
    pub question_service: Arc<AppQuestionService>,
    pub answer_service: Arc<AppAnswerService>,
}

impl AppState {
    /// Wires repositories and services on top of an open pool.
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let pool = Arc::new(pool);

        let question_repo = Arc::new(SqliteQuestionRepository::new(pool.clone()));
        let answer_repo = Arc::new(SqliteAnswerRepository::new(pool));

        let auth_service = Arc::new(AuthService::new(&config.jwt_secret_key));
        let question_service = Arc::new(QuestionService::new(question_repo.clone()));
        let answer_service = Arc::new(AnswerService::new(
            answer_repo,
            question_repo,
            config.secret_key.clone(),
        ));

        Self {
            config: Arc::new(config),
            auth_service,
            question_service,
            answer_service,
        }
    }
}
