//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod answers;
pub mod health;
pub mod questions;

pub use answers::{create_answer_handler, list_answers_handler};
pub use health::health_handler;
pub use questions::{
    create_question_handler, get_question_handler, list_questions_handler,
    update_question_handler,
};
