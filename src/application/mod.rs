//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! - [`services::auth_service::AuthService`] - Access token verification
//! - [`services::question_service::QuestionService`] - Secret question management
//! - [`services::answer_service::AnswerService`] - Hashed secret answers

pub mod services;
