//! Blog post handlers.

use actix_web::{HttpResponse, http::StatusCode, web};
use chrono::{SecondsFormat, Utc};

use blog_core::DomainError;
use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::ports::{BaseRepository, BlogPostRepository};
use blog_shared::dto::{
    BlogPostResponse, CreateBlogPostRequest, SearchQuery, UpdateBlogPostRequest, from_json_body,
};

use super::json_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        category: post.category,
        tags: post.tags,
        created_at: post.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        updated_at: post.updated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

async fn find_post(state: &AppState, id: i32) -> AppResult<BlogPost> {
    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(AppError::internal)?
        .ok_or(DomainError::NotFound {
            entity_type: "BlogPost",
            id,
        })?;

    Ok(post)
}

/// GET /blogs?search=STR
///
/// All posts, or those whose title, content or category contains the
/// trimmed search term.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let term = query.term();
    let posts = state.posts.search(term).await.map_err(AppError::internal)?;

    tracing::debug!(search = ?term, count = posts.len(), "Listed blog posts");

    let body: Vec<BlogPostResponse> = posts.into_iter().map(to_response).collect();
    json_response(StatusCode::OK, &body)
}

/// GET /blogs/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    json_response(StatusCode::OK, &to_response(post))
}

/// POST /blogs
///
/// Answers 200 with the stored post, or 400 when the body does not decode, a
/// required key is missing or the title is already taken.
pub async fn create_post(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req: CreateBlogPostRequest = from_json_body(&body).map_err(AppError::create_failed)?;

    let new_post = NewBlogPost::from_fields(
        req.title.into_option(),
        req.content.into_option(),
        req.category.into_option(),
        req.tags.into_option(),
    )
    .map_err(AppError::create_failed)?;

    let post = state
        .posts
        .create(new_post)
        .await
        .map_err(AppError::create_failed)?;

    tracing::info!(post_id = post.id, title = %post.title, "Blog post created");

    json_response(StatusCode::OK, &to_response(post))
}

/// PUT /blogs/{id}
///
/// Overwrites the fields present in the body. Unknown ids answer 404 before
/// the body is read; undecodable bodies and rejected writes also answer 404,
/// with details.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;
    let req: UpdateBlogPostRequest = from_json_body(&body).map_err(AppError::write_failed)?;

    let changes = BlogPostChanges::from_fields(
        req.title.into_option(),
        req.content.into_option(),
        req.category.into_option(),
        req.tags.into_option(),
    )
    .map_err(AppError::write_failed)?;

    if post.apply(changes, Utc::now()) {
        post = state
            .posts
            .update(post)
            .await
            .map_err(AppError::write_failed)?;
        tracing::info!(post_id = post.id, "Blog post updated");
    } else {
        tracing::debug!(post_id = post.id, "Update left blog post unchanged");
    }

    json_response(StatusCode::OK, &to_response(post))
}

/// DELETE /blogs/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    state
        .posts
        .delete(post.id)
        .await
        .map_err(AppError::write_failed)?;

    tracing::info!(post_id = post.id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
