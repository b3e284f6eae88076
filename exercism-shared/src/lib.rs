//! # Exercism Shared Library
//!
//! Types, persistence and presentation logic used by the Exercism API server.
//!
//! ## Module Organization
//!
//! - `auth`: requester token validation
//! - `db`: connection pool and migrations
//! - `models`: database models and their queries
//! - `store`: read-only data access returning eager snapshots
//! - `routes`: named solution URLs
//! - `responders`: pure JSON presenters (solution responder)

pub mod auth;
pub mod db;
pub mod models;
pub mod responders;
pub mod routes;
pub mod store;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
