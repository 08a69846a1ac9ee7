//! Database connection management and repositories.

mod connections;
pub mod entity;
mod sqlite_base;
mod sqlite_repo;

pub use sea_orm::DbErr;

pub use connections::{DATABASE_URL, DatabaseConfig, DatabaseConnections};
pub use sqlite_base::SqliteBaseRepository;
pub use sqlite_repo::SqliteBlogPostRepository;

#[cfg(test)]
mod tests;
