/// Exercise model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE exercises (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     track_id UUID NOT NULL REFERENCES tracks(id) ON DELETE CASCADE,
///     slug VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     UNIQUE (track_id, slug)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// An exercise belonging to exactly one track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
    /// Unique exercise ID
    pub id: Uuid,

    /// Owning track
    pub track_id: Uuid,

    /// URL slug, unique within the track (e.g. "hello-world")
    pub slug: String,

    /// When the exercise was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExercise {
    pub track_id: Uuid,
    pub slug: String,
}

impl Exercise {
    /// Creates a new exercise on a track
    pub async fn create(pool: &PgPool, data: CreateExercise) -> Result<Self, sqlx::Error> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (track_id, slug)
            VALUES ($1, $2)
            RETURNING id, track_id, slug, created_at
            "#,
        )
        .bind(data.track_id)
        .bind(data.slug)
        .fetch_one(pool)
        .await?;

        Ok(exercise)
    }

    /// Finds an exercise by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, track_id, slug, created_at
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(exercise)
    }
}
