use blog_core::domain::{BlogPost, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::json;

use crate::database::entity::blog_post;
use crate::database::{DatabaseConfig, DatabaseConnections, SqliteBlogPostRepository};

fn new_post(title: &str, content: &str, category: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_owned(),
        content: Some(content.to_owned()),
        category: Some(category.to_owned()),
        tags: Some(json!([])),
    }
}

async fn in_memory_repo() -> SqliteBlogPostRepository {
    let db = DatabaseConnections::init(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    SqliteBlogPostRepository::new(db.main)
}

#[tokio::test]
async fn test_find_post_by_id() {
    let now = chrono::Utc::now();

    // Mock the query expectation
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![blog_post::Model {
            id: 42,
            title: "Test Post".to_owned(),
            content: Some("Content".to_owned()),
            category: None,
            tags: Some(json!(["rust"])),
            created_at: now,
            updated_at: now,
        }]])
        .into_connection();

    let repo = SqliteBlogPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(42).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, 42);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.tags, Some(json!(["rust"])));
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SqliteBlogPostRepository::new(db);

    let result = BaseRepository::<BlogPost, i32>::delete(&repo, 999).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_create_stamps_both_timestamps() {
    let repo = in_memory_repo().await;

    let post = repo.create(new_post("Hello", "World", "intro")).await.unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.created_at, post.updated_at);
    assert_eq!(post.tags, Some(json!([])));
}

#[tokio::test]
async fn test_duplicate_title_is_constraint_violation() {
    let repo = in_memory_repo().await;
    repo.create(new_post("Hello", "World", "intro")).await.unwrap();

    let err = repo
        .create(new_post("Hello", "Again", "intro"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)), "got {err:?}");
    assert_eq!(repo.search(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_matches_any_text_column_case_insensitively() {
    let repo = in_memory_repo().await;
    repo.create(new_post("Tech news", "weekly", "news")).await.unwrap();
    repo.create(new_post("Gardening", "Low-TECH tools", "hobby")).await.unwrap();
    repo.create(new_post("Recipes", "soup", "technology")).await.unwrap();
    repo.create(new_post("Travel", "trains", "misc")).await.unwrap();

    let titles: Vec<String> = repo
        .search(Some("tech"))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Tech news", "Gardening", "Recipes"]);
    assert_eq!(repo.search(None).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let repo = in_memory_repo().await;
    repo.create(new_post("100% rust", "", "misc")).await.unwrap();
    repo.create(new_post("1000 ways", "", "misc")).await.unwrap();

    let found = repo.search(Some("100%")).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "100% rust");
}

#[tokio::test]
async fn test_update_persists_fields() {
    let repo = in_memory_repo().await;
    let mut post = repo.create(new_post("Hello", "World", "intro")).await.unwrap();

    post.tags = Some(json!(["x"]));
    post.updated_at = post.updated_at + chrono::Duration::seconds(1);
    let updated = repo.update(post.clone()).await.unwrap();

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.title, "Hello");
    let stored: BlogPost = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.tags, Some(json!(["x"])));
    assert!(stored.updated_at > stored.created_at);
}

#[tokio::test]
async fn test_update_to_taken_title_is_constraint_violation() {
    let repo = in_memory_repo().await;
    repo.create(new_post("First", "a", "x")).await.unwrap();
    let mut second = repo.create(new_post("Second", "b", "x")).await.unwrap();

    second.title = "First".to_owned();
    let err = repo.update(second).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)), "got {err:?}");
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let repo = in_memory_repo().await;
    repo.create(new_post("One", "", "x")).await.unwrap();
    let two = repo.create(new_post("Two", "", "x")).await.unwrap();

    BaseRepository::<BlogPost, i32>::delete(&repo, two.id)
        .await
        .unwrap();
    let three = repo.create(new_post("Three", "", "x")).await.unwrap();

    assert_eq!(three.id, 3);
    let gone: Option<BlogPost> = repo.find_by_id(two.id).await.unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_search_matches_non_ascii_terms() {
    let repo = in_memory_repo().await;
    repo.create(new_post("Émile Zola", "Über alles", "Café")).await.unwrap();
    repo.create(new_post("Plain", "ascii only", "misc")).await.unwrap();

    for term in ["Émile", "ÉMILE ZOLA", "zola", "Über", "Über ALLES", "Café", "CAFé"] {
        let found = repo.search(Some(term)).await.unwrap();
        assert_eq!(found.len(), 1, "search {term:?}");
        assert_eq!(found[0].title, "Émile Zola");
    }
}
