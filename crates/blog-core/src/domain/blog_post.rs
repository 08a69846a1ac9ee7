use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::DomainError;

/// Blog post entity - a single article as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Overwrite every field present in `changes`.
    ///
    /// Returns `true` when at least one stored value differs afterwards. In that
    /// case `updated_at` moves to `now`, but never backwards, so it stays at or
    /// after `created_at` even if the wall clock steps back.
    pub fn apply(&mut self, changes: BlogPostChanges, now: DateTime<Utc>) -> bool {
        let mut changed = false;

        if let Some(title) = changes.title {
            changed |= replace(&mut self.title, title);
        }
        if let Some(content) = changes.content {
            changed |= replace(&mut self.content, content);
        }
        if let Some(category) = changes.category {
            changed |= replace(&mut self.category, category);
        }
        if let Some(tags) = changes.tags {
            changed |= replace(&mut self.tags, tags);
        }

        if changed {
            self.updated_at = now.max(self.updated_at);
        }
        changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// A blog post that has not been persisted yet.
///
/// The store assigns the id; both timestamps are stamped from the same
/// instant on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Value>,
}

impl NewBlogPost {
    /// Build a post from request fields.
    ///
    /// Each argument is `None` when the key was absent and `Some(None)` when it
    /// was an explicit `null`. `title`, `content` and `category` must be
    /// present; `tags` falls back to an empty list.
    pub fn from_fields(
        title: Option<Option<String>>,
        content: Option<Option<String>>,
        category: Option<Option<String>>,
        tags: Option<Option<Value>>,
    ) -> Result<Self, DomainError> {
        let title = title
            .ok_or_else(|| DomainError::missing_field("title"))?
            .ok_or_else(|| DomainError::null_field("title"))?;
        let content = content.ok_or_else(|| DomainError::missing_field("content"))?;
        let category = category.ok_or_else(|| DomainError::missing_field("category"))?;
        let tags = tags.unwrap_or_else(|| Some(Value::Array(Vec::new())));

        Ok(Self {
            title,
            content,
            category,
            tags,
        })
    }
}

/// A partial update. `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub tags: Option<Option<Value>>,
}

impl BlogPostChanges {
    /// Build a change set from request fields, using the same absent/null
    /// encoding as [`NewBlogPost::from_fields`].
    pub fn from_fields(
        title: Option<Option<String>>,
        content: Option<Option<String>>,
        category: Option<Option<String>>,
        tags: Option<Option<Value>>,
    ) -> Result<Self, DomainError> {
        let title = match title {
            Some(None) => return Err(DomainError::null_field("title")),
            other => other.flatten(),
        };

        Ok(Self {
            title,
            content,
            category,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;

    fn sample(now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id: 1,
            title: "Hello".to_string(),
            content: Some("World".to_string()),
            category: Some("intro".to_string()),
            tags: Some(json!(["a", "b"])),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_new_post_defaults_tags_to_empty_list() {
        let post = NewBlogPost::from_fields(
            Some(Some("Hello".to_string())),
            Some(Some("World".to_string())),
            Some(None),
            None,
        )
        .unwrap();

        assert_eq!(post.tags, Some(json!([])));
        assert_eq!(post.category, None);
    }

    #[test]
    fn test_new_post_keeps_explicit_null_tags() {
        let post = NewBlogPost::from_fields(
            Some(Some("Hello".to_string())),
            Some(None),
            Some(None),
            Some(None),
        )
        .unwrap();

        assert_eq!(post.tags, None);
    }

    #[test]
    fn test_new_post_requires_content_key() {
        let err = NewBlogPost::from_fields(Some(Some("Hello".to_string())), None, Some(None), None)
            .unwrap_err();

        assert_eq!(err.to_string(), "missing field `content`");
    }

    #[test]
    fn test_new_post_rejects_null_title() {
        let err = NewBlogPost::from_fields(Some(None), Some(None), Some(None), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_changes_reject_null_title() {
        let err = BlogPostChanges::from_fields(Some(None), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "field `title` must not be null");
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let created = Utc::now();
        let mut post = sample(created);
        let later = created + Duration::seconds(5);

        let changes = BlogPostChanges {
            tags: Some(Some(json!(["x"]))),
            ..Default::default()
        };
        assert!(post.apply(changes, later));

        assert_eq!(post.title, "Hello");
        assert_eq!(post.content.as_deref(), Some("World"));
        assert_eq!(post.category.as_deref(), Some("intro"));
        assert_eq!(post.tags, Some(json!(["x"])));
        assert_eq!(post.created_at, created);
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn test_apply_without_difference_keeps_timestamp() {
        let created = Utc::now();
        let mut post = sample(created);

        let changes = BlogPostChanges {
            title: Some("Hello".to_string()),
            ..Default::default()
        };
        assert!(!post.apply(changes, created + Duration::seconds(5)));
        assert_eq!(post.updated_at, created);
    }

    #[test]
    fn test_apply_never_moves_updated_at_backwards() {
        let created = Utc::now();
        let mut post = sample(created);

        let changes = BlogPostChanges {
            content: Some(None),
            ..Default::default()
        };
        assert!(post.apply(changes, created - Duration::seconds(30)));
        assert_eq!(post.content, None);
        assert_eq!(post.updated_at, created);
    }
}
