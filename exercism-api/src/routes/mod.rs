/// API route handlers
///
/// - `health`: health check
/// - `blog_posts`: published blog posts
/// - `solutions`: solution rendering for an authenticated requester

pub mod blog_posts;
pub mod health;
pub mod solutions;
