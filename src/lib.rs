//! # ADReset
//!
//! Self-service Active Directory password reset API built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, token claims, page arithmetic, repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, guards and pagination
//!
//! ## Access control
//!
//! Every API route verifies a bearer access token. Administrator routes additionally
//! require the `admin` role, self-service routes the `user` role.
//!
//! ## Quick Start
//!
//! ```bash
//! export ADRESET_ENV="development"
//! export JWT_SECRET_KEY="..."
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is selected by environment and overridden from environment
//! variables via [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnswerService, AuthService, QuestionService};
    pub use crate::config::{Config, Environment};
    pub use crate::domain::claims::Claims;
    pub use crate::domain::page::{Page, PageRequest};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
