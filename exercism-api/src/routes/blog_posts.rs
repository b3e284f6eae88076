/// Blog post endpoints
///
/// ```text
/// GET /blog-posts          published posts, newest first
/// GET /blog-posts/:slug    one published post
/// ```
///
/// A post counts as published once its `published_at` is at or before the
/// request time. Scheduled and draft posts are reported as 404.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use exercism_shared::models::blog_post::BlogPost;
use serde::{Deserialize, Serialize};

/// Response for the listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogPostList {
    pub blog_posts: Vec<BlogPost>,
}

/// Response for a single post
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub blog_post: BlogPost,
}

pub async fn list_blog_posts(State(state): State<AppState>) -> ApiResult<Json<BlogPostList>> {
    let blog_posts = state.store.published_blog_posts(Utc::now()).await?;

    tracing::debug!(count = blog_posts.len(), "Listed published blog posts");

    Ok(Json(BlogPostList { blog_posts }))
}

pub async fn show_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPostResponse>> {
    let blog_post = state
        .store
        .find_published_blog_post(&slug, Utc::now())
        .await?
        .ok_or_else(|| {
            tracing::warn!(slug = %slug, "Blog post not found");
            ApiError::NotFound("Blog post not found".to_string())
        })?;

    Ok(Json(BlogPostResponse { blog_post }))
}
