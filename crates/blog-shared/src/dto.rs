//! Data Transfer Objects - request/response types for the API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A request field that distinguishes an absent key from an explicit `null`.
///
/// Use together with `#[serde(default)]` so a missing key becomes
/// [`Field::Missing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> Field<T> {
    /// `None` when absent, `Some(None)` when null.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Field::Missing => None,
            Field::Null => Some(None),
            Field::Value(value) => Some(Some(value)),
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Value(value),
            None => Field::Null,
        })
    }
}

/// Request to create a blog post. `title`, `content` and `category` are
/// required keys; `tags` is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogPostRequest {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub content: Field<String>,
    #[serde(default)]
    pub category: Field<String>,
    #[serde(default)]
    pub tags: Field<Value>,
}

/// Request to update a blog post. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub content: Field<String>,
    #[serde(default)]
    pub category: Field<String>,
    #[serde(default)]
    pub tags: Field<Value>,
}

/// Decode a raw request body.
///
/// Handlers decode bodies themselves so that a body that does not fit the
/// request type fails with the error of the operation it was sent to.
pub fn from_json_body<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    serde_json::from_slice(body)
}

/// Query string of the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

impl SearchQuery {
    /// The trimmed search term, or `None` when it is absent or blank.
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// A blog post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Value>,
    pub created_at: String,
    pub updated_at: String,
}
