//! HTTP middleware for request processing and protection.
//!
//! Provides the access token guards, CORS and observability middleware.

pub mod auth;
pub mod cors;
pub mod tracing;
