//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate owns the SQLite record store: connection pool, schema creation
//! and the SeaORM-backed blog post repository.

pub mod database;

pub use database::{DatabaseConfig, DatabaseConnections, SqliteBlogPostRepository};
