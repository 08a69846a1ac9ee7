use async_trait::async_trait;

use crate::domain::{BlogPost, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, i32> {
    /// All posts, or those whose title, content or category contains `term`
    /// case-insensitively.
    async fn search(&self, term: Option<&str>) -> Result<Vec<BlogPost>, RepoError>;

    /// Insert a new post and return it with its assigned id.
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Persist every mutable field of an existing post.
    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError>;
}
