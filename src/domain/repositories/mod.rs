//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`QuestionRepository`] - Secret question management
//! - [`AnswerRepository`] - Users' hashed answers

pub mod answer_repository;
pub mod question_repository;

pub use answer_repository::AnswerRepository;
pub use question_repository::QuestionRepository;

#[cfg(test)]
pub use answer_repository::MockAnswerRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
