//! Core domain entities.
//!
//! Entities are plain data structures without business logic, with separate
//! structs for creation:
//!
//! - [`Question`] / [`NewQuestion`] - Secret questions managed by administrators
//! - [`Answer`] / [`NewAnswer`] - A user's hashed answer to a question

pub mod answer;
pub mod question;

pub use answer::{Answer, NewAnswer};
pub use question::{NewQuestion, Question};
