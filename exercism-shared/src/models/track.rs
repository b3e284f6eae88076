/// Track model and database operations
///
/// A track is a language-specific curriculum (e.g. `ruby`, `rust`).
/// Tracks are addressed by slug in public URLs.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tracks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     slug VARCHAR(255) NOT NULL UNIQUE,
///     title VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A language track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Track {
    /// Unique track ID
    pub id: Uuid,

    /// URL slug (e.g. "ruby")
    pub slug: String,

    /// Human readable title (e.g. "Ruby")
    pub title: String,

    /// When the track was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrack {
    /// URL slug (must be unique)
    pub slug: String,

    /// Human readable title
    pub title: String,
}

impl Track {
    /// Creates a new track
    pub async fn create(pool: &PgPool, data: CreateTrack) -> Result<Self, sqlx::Error> {
        let track = sqlx::query_as::<_, Track>(
            r#"
            INSERT INTO tracks (slug, title)
            VALUES ($1, $2)
            RETURNING id, slug, title, created_at
            "#,
        )
        .bind(data.slug)
        .bind(data.title)
        .fetch_one(pool)
        .await?;

        Ok(track)
    }

    /// Finds a track by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let track = sqlx::query_as::<_, Track>(
            r#"
            SELECT id, slug, title, created_at
            FROM tracks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(track)
    }
}
