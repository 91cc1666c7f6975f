//! SQLite repository implementations.
//!
//! - [`SqliteQuestionRepository`] - Secret question storage
//! - [`SqliteAnswerRepository`] - Hashed answer storage
//! - [`connect`] - Pool creation and migrations

pub mod pool;
pub mod sqlite_answer_repository;
pub mod sqlite_question_repository;

pub use pool::connect;
pub use sqlite_answer_repository::SqliteAnswerRepository;
pub use sqlite_question_repository::SqliteQuestionRepository;
