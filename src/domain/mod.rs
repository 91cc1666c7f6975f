//! Domain layer containing business entities and data access contracts.
//!
//! - [`claims`] - Verified access token claims and role names
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`page`] - Page request validation and navigation arithmetic
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod claims;
pub mod entities;
pub mod page;
pub mod repositories;
