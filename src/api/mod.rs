//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - `Json`/`Path` extractors rejecting with the error envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Access token guards, CORS and tracing
//! - [`pagination`] - The [`pagination::Paginate`] extractor for list endpoints
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod routes;
