use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    blog::domain::BlogPost,
    blog::ports::{BlogPostUpdate, BlogRepositoryError, NewBlogPost},
    shared::api::{ok_message, ApiError},
    AppState,
};

#[derive(Debug, Deserialize)]
struct BlogListQuery {
    reset: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    summary: Option<String>,
    cover_image: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    revision: Option<u64>,
}

#[derive(Serialize)]
struct BlogMutationResponse {
    message: String,
    blog: BlogPost,
}

#[get("/api/blogs")]
pub async fn list_blogs(
    query: web::Query<BlogListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blogs = if query.reset.unwrap_or(false) {
        data.blogs.reset().await
    } else {
        data.blogs.list().await
    };
    HttpResponse::Ok().json(blogs)
}

#[get("/api/blogs/{id}")]
pub async fn get_blog(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    match data.blogs.get(&path).await {
        Ok(blog) => HttpResponse::Ok().json(blog),
        Err(BlogRepositoryError::NotFound) => ApiError::not_found("Blog not found"),
        Err(other) => {
            warn!(error = %other, "unexpected error fetching blog");
            ApiError::internal("Failed to fetch blog")
        }
    }
}

#[post("/api/blogs/create")]
pub async fn create_blog(
    payload: web::Json<BlogPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.title.trim().is_empty() || payload.content.trim().is_empty() {
        return ApiError::bad_request("Title and content are required");
    }

    let blog = data
        .blogs
        .create(NewBlogPost {
            title: payload.title.clone(),
            content: payload.content.clone(),
            summary: payload.summary.clone(),
            cover_image: payload.cover_image.clone(),
            tags: payload.tags.clone(),
        })
        .await;

    HttpResponse::Created().json(BlogMutationResponse {
        message: "Blog created successfully".to_string(),
        blog,
    })
}

#[put("/api/blogs/{id}")]
pub async fn update_blog(
    path: web::Path<String>,
    payload: web::Json<BlogPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    if payload.title.trim().is_empty() || payload.content.trim().is_empty() {
        return ApiError::bad_request("Title and content are required");
    }

    let update = BlogPostUpdate {
        title: payload.title.clone(),
        content: payload.content.clone(),
        summary: payload.summary.clone(),
        cover_image: payload.cover_image.clone(),
        tags: payload.tags.clone(),
        revision: payload.revision,
    };

    match data.blogs.update(&path, update).await {
        Ok(blog) => HttpResponse::Ok().json(BlogMutationResponse {
            message: "Blog updated successfully".to_string(),
            blog,
        }),
        Err(BlogRepositoryError::NotFound) => ApiError::not_found("Blog not found"),
        Err(BlogRepositoryError::RevisionMismatch) => ApiError::conflict("Revision mismatch"),
    }
}

#[delete("/api/blogs/{id}")]
pub async fn delete_blog(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    match data.blogs.delete(&path).await {
        Ok(()) => ok_message("Blog deleted successfully"),
        Err(BlogRepositoryError::NotFound) => ApiError::not_found("Blog not found"),
        Err(other) => {
            warn!(error = %other, "unexpected error deleting blog");
            ApiError::internal("Failed to delete blog")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_blogs)
        .service(create_blog)
        .service(get_blog)
        .service(update_blog)
        .service(delete_blog);
}
