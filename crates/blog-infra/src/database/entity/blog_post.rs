//! Blog post entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use blog_core::domain::{BlogPost, NewBlogPost};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(120))", unique)]
    pub title: String,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(80))", nullable)]
    pub category: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub tags: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Insert form of a new post; the id is left for the store to assign.
    pub fn from_new(post: NewBlogPost, now: DateTimeUtc) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            category: Set(post.category),
            tags: Set(post.tags),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            tags: model.tags,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Conversion from Domain BlogPost to an update of the existing row.
///
/// `id` and `created_at` are never written back.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Unchanged(post.id),
            title: Set(post.title),
            content: Set(post.content),
            category: Set(post.category),
            tags: Set(post.tags),
            created_at: Unchanged(post.created_at),
            updated_at: Set(post.updated_at),
        }
    }
}
