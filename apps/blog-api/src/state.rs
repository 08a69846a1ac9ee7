//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::database::DbErr;
use blog_infra::{DatabaseConfig, DatabaseConnections, SqliteBlogPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    pub db: DatabaseConnections,
}

impl AppState {
    /// Open the record store and wire the repository.
    ///
    /// Fails when the database cannot be opened or its schema created; the
    /// server must not start accepting requests in that case.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = DatabaseConnections::init(config).await?;
        let posts: Arc<dyn BlogPostRepository> =
            Arc::new(SqliteBlogPostRepository::new(db.main.clone()));

        tracing::info!("Application state initialized");

        Ok(Self { posts, db })
    }
}
