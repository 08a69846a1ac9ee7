//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use blog_shared::to_pretty_json;
use serde::Serialize;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // A non-numeric id can never match a post.
    cfg.app_data(
        web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::resource("/blogs")
            .route(web::get().to(blogs::list_posts))
            .route(web::post().to(blogs::create_post)),
    )
    .service(
        web::resource("/blogs/{id}")
            .route(web::get().to(blogs::get_post))
            .route(web::put().to(blogs::update_post))
            .route(web::delete().to(blogs::delete_post)),
    );
}

/// Build a response whose body is `body` as four-space indented JSON.
pub(crate) fn json_response<T>(status: StatusCode, body: &T) -> AppResult<HttpResponse>
where
    T: Serialize + ?Sized,
{
    let bytes = to_pretty_json(body).map_err(AppError::internal)?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(bytes))
}
