//! SQLite repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{ActiveModelTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use blog_core::domain::{BlogPost, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::sqlite_base::{SqliteBaseRepository, repo_error};

/// SQLite blog post repository.
pub type SqliteBlogPostRepository = SqliteBaseRepository<BlogPostEntity>;

/// `instr(lower(col), lower(term)) > 0`.
///
/// SQLite folds both sides with the same `lower()`, so a term always matches
/// text that contains it verbatim, and `%` or `_` in the term are plain
/// characters.
fn lower_contains(column: blog_post::Column, term: &str) -> SimpleExpr {
    Expr::expr(
        Func::cust(Alias::new("instr"))
            .arg(Func::lower(Expr::col((BlogPostEntity, column))))
            .arg(Func::lower(Expr::val(term))),
    )
    .gt(0)
}

#[async_trait]
impl BlogPostRepository for SqliteBlogPostRepository {
    async fn search(&self, term: Option<&str>) -> Result<Vec<BlogPost>, RepoError> {
        let mut query = BlogPostEntity::find().order_by_asc(blog_post::Column::Id);

        if let Some(term) = term {
            tracing::debug!(term, "Searching blog posts");
            query = query.filter(
                Condition::any()
                    .add(lower_contains(blog_post::Column::Title, term))
                    .add(lower_contains(blog_post::Column::Content, term))
                    .add(lower_contains(blog_post::Column::Category, term)),
            );
        }

        let result = query.all(&self.db).await.map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let model = blog_post::ActiveModel::from_new(post, Utc::now())
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, "Blog post inserted");
        Ok(model.into())
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let model = blog_post::ActiveModel::from(post)
            .update(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(model.into())
    }
}

