/// Blog post model and database operations
///
/// Posts become visible once `published_at` is reached. Scheduled posts
/// (publish time in the future) are treated exactly like missing posts by
/// the public read paths.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE blog_posts (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     slug VARCHAR(255) NOT NULL UNIQUE,
///     title VARCHAR(255) NOT NULL,
///     content TEXT NOT NULL DEFAULT '',
///     published_at TIMESTAMPTZ,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use exercism_shared::models::blog_post::BlogPost;
/// use chrono::Utc;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let posts = BlogPost::list_published(&pool, Utc::now()).await?;
/// for post in posts {
///     println!("{} ({})", post.title, post.slug);
/// }
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,

    /// URL slug (unique)
    pub slug: String,

    pub title: String,

    /// Markdown source, returned verbatim
    pub content: String,

    /// Publish time (None for drafts)
    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a new blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPost {
    pub slug: String,
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Whether the post is visible as of `now`
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        matches!(self.published_at, Some(at) if at <= now)
    }

    /// Creates a new post
    pub async fn create(pool: &PgPool, data: CreateBlogPost) -> Result<Self, sqlx::Error> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (slug, title, content, published_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, slug, title, content, published_at, created_at
            "#,
        )
        .bind(data.slug)
        .bind(data.title)
        .bind(data.content)
        .bind(data.published_at)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Lists posts published as of `now`, newest first
    ///
    /// Ties on `published_at` go to the most recently created post, then by slug.
    pub async fn list_published(pool: &PgPool, now: DateTime<Utc>) -> Result<Vec<Self>, sqlx::Error> {
        let posts = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, slug, title, content, published_at, created_at
            FROM blog_posts
            WHERE published_at IS NOT NULL AND published_at <= $1
            ORDER BY published_at DESC, created_at DESC, slug ASC
            "#,
        )
        .bind(now)
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Finds a post by slug, but only if it is published as of `now`
    ///
    /// Returns `None` both for unknown slugs and for scheduled posts.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Self>, sqlx::Error> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, slug, title, content, published_at, created_at
            FROM blog_posts
            WHERE slug = $1 AND published_at IS NOT NULL AND published_at <= $2
            "#,
        )
        .bind(slug)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }
}
